use crate::formatter::significant::{SplitDigits, fraction_digits};
use crate::rounding::round_half_even;
use crate::types::FormatSpec;

/// Render integer digits padded on the left to `min` and cut to the last
/// `max` digits
pub(super) fn pad_integer(whole: f64, min: usize, max: Option<usize>, pad: char) -> String {
    if whole == 0.0 && min == 0 {
        return String::new();
    }

    let mut digits = whole.to_string();
    if let Some(max) = max {
        if digits.len() > max {
            // 1997 with two integer digits is shown as "97"
            digits = digits.split_off(digits.len() - max);
        }
    }

    if digits.len() < min {
        let padding: String = std::iter::repeat_n(pad, min - digits.len()).collect();
        digits.insert_str(0, &padding);
    }
    digits
}

/// Format the magnitude of `value` with fixed integer and fraction bounds
///
/// Integer and fraction come from the same half-even rounded value, so a
/// fraction that rounds up carries into the integer part.
pub(super) fn format_fixed(value: f64, spec: &FormatSpec) -> SplitDigits {
    let abs_value = value.abs();
    let rounded = round_half_even(abs_value, spec.frac_max as i32);

    let integer = pad_integer(rounded.floor(), spec.int_min, spec.int_max, spec.pad);

    let fraction = if abs_value.fract() != 0.0 {
        let mut digits = fraction_digits(rounded);
        digits.truncate(spec.frac_max);
        while digits.len() < spec.frac_min {
            digits.push(spec.pad);
        }
        digits
    } else {
        // Integral values always show literal zeros
        "0".repeat(spec.frac_min)
    };

    SplitDigits { integer, fraction }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_integer() {
        assert_eq!(pad_integer(1997.0, 5, None, '0'), "01997");
        assert_eq!(pad_integer(1997.0, 1, Some(2), '0'), "97");
        assert_eq!(pad_integer(0.0, 0, None, '0'), "");
        assert_eq!(pad_integer(0.0, 1, None, '0'), "0");
    }

    #[test]
    fn test_huge_integer_has_no_exponent() {
        let digits = pad_integer(1e21, 1, None, '0');
        assert_eq!(digits, "1000000000000000000000");
    }
}
