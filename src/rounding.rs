//! Round-half-to-even at decimal precision

/// Distance from an exact half below which a value counts as a tie
const EPSILON: f64 = 1e-12;

/// Rounds `value` to `places` fractional decimal digits, resolving ties to the
/// even neighbour.
///
/// Negative values are rounded by magnitude. A negative `places` rounds to
/// tens, hundreds and so on.
///
/// # Examples
/// ```
/// use ldml_number_format::round_half_even;
///
/// assert_eq!(round_half_even(2.5, 0), 2.0);
/// assert_eq!(round_half_even(3.5, 0), 4.0);
/// assert_eq!(round_half_even(-2.5, 0), -2.0);
/// assert_eq!(round_half_even(1234.5678, 2), 1234.57);
/// assert_eq!(round_half_even(12345.0, -2), 12300.0);
/// ```
pub fn round_half_even(value: f64, places: i32) -> f64 {
    if value < 0.0 {
        return -round_half_even(-value, places);
    }

    if places != 0 {
        // Scale by an exact power of ten in whichever direction keeps it exact
        let factor = 10f64.powi(places.abs());
        if !factor.is_finite() {
            return value;
        }
        return if places > 0 {
            let scaled = value * factor;
            if !scaled.is_finite() {
                return value;
            }
            round_half_even(scaled, 0) / factor
        } else {
            round_half_even(value / factor, 0) * factor
        };
    }

    let whole = value.floor();
    let distance = value - (whole + 0.5);
    if distance > -EPSILON && distance < EPSILON {
        return if whole % 2.0 < EPSILON {
            whole
        } else {
            whole + 1.0
        };
    }
    value.round()
}
