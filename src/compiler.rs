//! Pattern compilation
//!
//! Turns parsed subpatterns into an immutable [`FormatSpec`]. The structural
//! rules are checked on the token runs before any digit bounds are derived.

use tracing::debug;

use crate::error::{PatternError, Result};
use crate::parser::parse_number_pattern;
use crate::types::*;

/// The numeric core of a subpattern split into its runs
#[derive(Debug, Clone, Copy)]
struct NumberParts<'a> {
    integer: &'a [PatternToken],
    fraction: Option<&'a [PatternToken]>,
    exponent: Option<(bool, usize)>,
}

impl<'a> NumberParts<'a> {
    fn split(core: &'a [PatternToken]) -> Self {
        let (mantissa, exponent) = match core.last() {
            Some(PatternToken::Exponent { plus, min_digits }) => {
                (&core[..core.len() - 1], Some((*plus, *min_digits)))
            }
            _ => (core, None),
        };

        match mantissa
            .iter()
            .position(|t| matches!(t, PatternToken::DecimalPoint))
        {
            Some(point) => Self {
                integer: &mantissa[..point],
                fraction: Some(&mantissa[point + 1..]),
                exponent,
            },
            None => Self {
                integer: mantissa,
                fraction: None,
                exponent,
            },
        }
    }

    fn fraction(&self) -> &'a [PatternToken] {
        self.fraction.unwrap_or(&[])
    }

    fn has_grouping(&self) -> bool {
        self.integer
            .iter()
            .chain(self.fraction())
            .any(|t| matches!(t, PatternToken::Grouping))
    }

    fn has_significance(&self) -> bool {
        self.integer
            .iter()
            .chain(self.fraction())
            .any(|t| matches!(t, PatternToken::Digit(DigitKind::Significant)))
    }
}

fn count_digits(run: &[PatternToken]) -> usize {
    run.iter().filter(|t| t.is_digit()).count()
}

fn count_required(run: &[PatternToken]) -> usize {
    run.iter().filter(|t| t.is_required_digit()).count()
}

/// Checks the structural rules of a numeric core
fn validate(parts: &NumberParts<'_>, core: &[PatternToken]) -> Result<()> {
    let integer = parts.integer;
    let fraction = parts.fraction();

    // A literal digit may not be followed by an optional one
    if let Some(first_required) = integer.iter().position(|t| t.is_required_digit()) {
        if integer[first_required..]
            .iter()
            .any(|t| matches!(t, PatternToken::Digit(DigitKind::Optional)))
        {
            return Err(PatternError::MalformedIntegerPattern {
                fragment: render_tokens(integer),
            });
        }
    }

    if let Some(first_optional) = fraction
        .iter()
        .position(|t| matches!(t, PatternToken::Digit(DigitKind::Optional)))
    {
        if fraction[first_optional..]
            .iter()
            .any(|t| t.is_required_digit())
        {
            return Err(PatternError::MalformedFractionPattern {
                fragment: render_tokens(fraction),
            });
        }
    }

    if parts.exponent.is_some() && parts.has_grouping() {
        return Err(PatternError::ExponentWithGrouping {
            fragment: render_tokens(core),
        });
    }

    let significance = parts.has_significance();
    if significance && parts.fraction.is_some() {
        return Err(PatternError::SignificanceWithDecimalPoint {
            fragment: render_tokens(core),
        });
    }

    if significance
        && integer
            .iter()
            .any(|t| matches!(t, PatternToken::Digit(DigitKind::Required('0'))))
    {
        return Err(PatternError::SignificanceWithLiteralZero {
            fragment: render_tokens(core),
        });
    }

    Ok(())
}

/// Returns (primary, secondary) group sizes from the integer run
fn group_sizes(integer: &[PatternToken]) -> (usize, usize) {
    let segments: Vec<usize> = integer
        .split(|t| matches!(t, PatternToken::Grouping))
        .map(count_digits)
        .collect();

    match segments.len() {
        0 | 1 => (0, 0),
        2 => (segments[1], segments[1]),
        n => (segments[n - 1], segments[n - 2]),
    }
}

/// Returns (sig_min, sig_max) for a significant-digit integer run
fn significant_bounds(integer: &[PatternToken]) -> (usize, usize) {
    let is_sig = |t: &PatternToken| matches!(t, PatternToken::Digit(DigitKind::Significant));

    let Some(start) = integer.iter().position(is_sig) else {
        return (1, 1);
    };
    let sig_min = integer[start..].iter().take_while(|t| is_sig(t)).count();
    let trailing = count_digits(&integer[start + sig_min..]);
    (sig_min, sig_min + trailing)
}

/// Compile the positive/negative pair of subpatterns into a single-branch rule
fn compile_branches(
    pattern: &str,
    positive: &Subpattern,
    negative: Option<&Subpattern>,
) -> Result<FormatSpec> {
    let parts = NumberParts::split(&positive.core);
    validate(&parts, &positive.core)?;

    // A negative subpattern only contributes its affixes
    let negative = negative.filter(|sub| !sub.is_literal());
    if let Some(sub) = negative {
        validate(&NumberParts::split(&sub.core), &sub.core)?;
    }

    let significance = parts.has_significance();
    let (exp_plus, exp_min) = parts.exponent.unwrap_or((false, 0));
    let exponent = parts.exponent.is_some();

    let integer = parts.integer;
    let fraction = parts.fraction();

    let mut int_max = if exponent || significance {
        Some(count_digits(integer))
    } else {
        None
    };
    let mut int_min = if integer.is_empty() {
        0
    } else {
        count_required(integer).max(1)
    };
    let mut frac_max = count_digits(fraction);
    let mut frac_min = count_required(fraction);

    let (sig_min, sig_max) = if significance {
        let (min, max) = significant_bounds(integer);
        (min, Some(max))
    } else {
        (1, None)
    };

    let (group_primary, group_secondary) = group_sizes(integer);

    if exponent && significance {
        int_min = 1;
        int_max = Some(1);
        frac_min = sig_min;
        frac_max = sig_max.unwrap_or(sig_min);
    }

    let scale = if positive.has_percent() || negative.is_some_and(|sub| sub.has_percent()) {
        100
    } else if positive.has_permille() || negative.is_some_and(|sub| sub.has_permille()) {
        1000
    } else {
        1
    };

    let positive_prefix = render_affix(&positive.prefix);
    let positive_suffix = render_affix(&positive.suffix);
    let (negative_prefix, negative_suffix) = match negative {
        Some(sub) => (render_affix(&sub.prefix), render_affix(&sub.suffix)),
        None => (format!("-{positive_prefix}"), positive_suffix.clone()),
    };

    Ok(FormatSpec {
        pattern: pattern.to_string(),
        significance,
        exponent,
        grouping: group_primary > 0 || group_secondary > 0,
        exp_plus,
        literal: positive.is_literal(),
        int_min,
        int_max,
        frac_min,
        frac_max,
        sig_min,
        sig_max,
        exp_min,
        group_primary,
        group_secondary,
        prefix: [positive_prefix, negative_prefix],
        suffix: [positive_suffix, negative_suffix],
        pad: '0',
        scale,
        zero: None,
        text: None,
    })
}

/// Compile a parsed pattern
pub fn compile_parsed(parsed: &ParsedPattern) -> Result<FormatSpec> {
    let mut spec = compile_branches(&parsed.source, &parsed.positive, parsed.negative.as_ref())?;

    if let Some(zero) = &parsed.zero {
        spec.zero = Some(Box::new(compile_branches(&zero.source, zero, None)?));
    }
    spec.text = parsed.text.clone();

    Ok(spec)
}

/// Compile a pattern string into a reusable formatting rule
///
/// The numeric core of an explicit negative subpattern is checked with the
/// same rules as the positive one, even though only its prefix and suffix are
/// used. `0;#0#` is rejected.
///
/// # Examples
/// ```
/// use ldml_number_format::compile;
///
/// let spec = compile("#,##0.##").unwrap();
/// assert_eq!(spec.frac_max, 2);
/// assert_eq!(spec.prefix[1], "-");
/// ```
pub fn compile(pattern: &str) -> Result<FormatSpec> {
    let compiled = parse_number_pattern(pattern).and_then(|parsed| compile_parsed(&parsed));

    match &compiled {
        Ok(spec) => debug!(
            pattern,
            exponent = spec.exponent,
            significance = spec.significance,
            grouping = spec.grouping,
            scale = spec.scale,
            "compiled number pattern"
        ),
        Err(error) => debug!(pattern, %error, "rejected number pattern"),
    }

    compiled
}

impl FormatSpec {
    /// Compile a pattern string, see [`compile`]
    pub fn compile(pattern: &str) -> Result<Self> {
        compile(pattern)
    }
}
