use crate::formatter::significant::{SplitDigits, split_significant};
use crate::locale::LocaleSymbols;
use crate::types::FormatSpec;

/// Mantissa digits plus the rendered exponent (sign and digits)
pub(super) struct ExponentialDigits {
    pub mantissa: SplitDigits,
    pub exponent: String,
}

/// Multiply `value` by `10^power` without overflowing the intermediate power
fn shift_decimal(value: f64, power: i32) -> f64 {
    const STEP: i32 = 300;
    let mut result = value;
    let mut remaining = power;
    while remaining != 0 {
        let step = remaining.clamp(-STEP, STEP);
        // Dividing by an exact power of ten is more accurate than multiplying by its inverse
        result = if step < 0 {
            result / 10f64.powi(-step)
        } else {
            result * 10f64.powi(step)
        };
        remaining -= step;
    }
    result
}

/// Format a number in exponential notation
///
/// The exponent is chosen so the mantissa keeps exactly `int_min` integer
/// digits, or, when the integer part has a range, so the exponent is a
/// multiple of `int_max`.
pub(super) fn format_exponential(value: f64, spec: &FormatSpec, locale: &LocaleSymbols) -> ExponentialDigits {
    let abs_value = value.abs();
    let fixed_integer_digits = spec.int_max == Some(spec.int_min);

    let mut exponent = if abs_value == 0.0 {
        0
    } else {
        abs_value.log10().floor() as i32
    };

    let mut step = 1;
    if fixed_integer_digits {
        exponent -= spec.int_min as i32 - 1;
    } else if let Some(int_max) = spec.int_max.filter(|max| *max > 0) {
        // Exponent grouping, as in engineering notation
        step = int_max as i32;
        exponent = exponent.div_euclid(step) * step;
    }

    let min_digits = spec.int_min + spec.frac_min;
    let max_digits = spec.int_max.map(|max| max + spec.frac_max);

    let mut mantissa = split_significant(shift_decimal(abs_value, -exponent), min_digits, max_digits, spec.pad);

    // Rounding may carry the mantissa up to the next power of ten
    if let Some(int_max) = spec.int_max {
        if int_max > 0 && mantissa.integer.len() > int_max {
            exponent += step;
            mantissa = split_significant(shift_decimal(abs_value, -exponent), min_digits, max_digits, spec.pad);
        }
    }

    // A pattern without integer digits shows a bare fraction, as in the fixed branch
    if spec.int_min == 0 && mantissa.integer == "0" {
        mantissa.integer.clear();
    }

    let sign = if exponent < 0 {
        locale.negative_sign.as_str()
    } else if spec.exp_plus {
        locale.positive_sign.as_str()
    } else {
        ""
    };

    let digits = exponent.unsigned_abs().to_string();
    let padding: String = std::iter::repeat_n(spec.pad, spec.exp_min.saturating_sub(digits.len())).collect();

    ExponentialDigits {
        mantissa,
        exponent: format!("{sign}{padding}{digits}"),
    }
}
