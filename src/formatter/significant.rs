use crate::rounding::round_half_even;

/// Digits of a formatted value on either side of the decimal separator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct SplitDigits {
    pub integer: String,
    pub fraction: String,
}

/// Decimal digits after the point in the shortest representation of `value`
pub(super) fn fraction_digits(value: f64) -> String {
    let repr = value.to_string();
    repr.split_once('.')
        .map(|(_, fraction)| fraction.to_string())
        .unwrap_or_default()
}

/// Split `value` into integer and fraction digits holding between `min` and
/// `max` significant digits
///
/// The value is rounded half-to-even at the position that keeps `max`
/// significant digits. When fewer than `min` digits remain, the fraction is
/// padded with `pad`.
pub(super) fn split_significant(value: f64, min: usize, max: Option<usize>, pad: char) -> SplitDigits {
    let value = value.abs();
    let magnitude = if value == 0.0 {
        1
    } else {
        value.log10().ceil() as i32
    };

    let rounded = match max {
        Some(max) => round_half_even(value, max as i32 - magnitude),
        None => value,
    };

    let whole = rounded.floor();
    let integer = whole.to_string();
    let mut fraction = fraction_digits(rounded);

    // Leading zeros of a pure fraction are not significant
    let width = if rounded == 0.0 {
        1
    } else if whole != 0.0 {
        integer.len() + fraction.len()
    } else {
        fraction.trim_start_matches('0').len()
    };

    if min > width {
        fraction.extend(std::iter::repeat_n(pad, min - width));
    }

    SplitDigits { integer, fraction }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(value: f64, min: usize, max: usize) -> (String, String) {
        let digits = split_significant(value, min, Some(max), '0');
        (digits.integer, digits.fraction)
    }

    #[test]
    fn test_rounds_to_max_significant_digits() {
        assert_eq!(split(12345.0, 3, 3), ("12300".to_string(), String::new()));
        assert_eq!(split(0.012345, 3, 3), ("0".to_string(), "0123".to_string()));
        assert_eq!(split(1.2346, 4, 4), ("1".to_string(), "235".to_string()));
    }

    #[test]
    fn test_pads_to_min_significant_digits() {
        assert_eq!(split(1.5, 3, 3), ("1".to_string(), "50".to_string()));
        assert_eq!(split(1.0, 3, 3), ("1".to_string(), "00".to_string()));
        assert_eq!(split(10.0, 3, 3), ("10".to_string(), "0".to_string()));
        assert_eq!(split(0.0, 3, 3), ("0".to_string(), "00".to_string()));
    }

    #[test]
    fn test_negative_powers_of_ten_keep_max_digits() {
        assert_eq!(split(0.1, 3, 3), ("0".to_string(), "100".to_string()));
        assert_eq!(split(0.01, 3, 3), ("0".to_string(), "0100".to_string()));
        assert_eq!(split(0.001, 2, 2), ("0".to_string(), "0010".to_string()));
        assert_eq!(split(0.05, 3, 3), ("0".to_string(), "0500".to_string()));
    }

    #[test]
    fn test_optional_significant_digits_are_dropped() {
        assert_eq!(split(1.5, 1, 3), ("1".to_string(), "5".to_string()));
        assert_eq!(split(2.0, 1, 3), ("2".to_string(), String::new()));
    }

    #[test]
    fn test_fraction_digits_uses_shortest_repr() {
        assert_eq!(fraction_digits(1234567.89), "89");
        assert_eq!(fraction_digits(42.0), "");
        assert_eq!(fraction_digits(0.0000001), "0000001");
    }
}
