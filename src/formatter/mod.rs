//! Number formatting module
//!
//! This module is responsible for formatting numbers with a compiled
//! [`FormatSpec`]. The main entry point is the `format` function.

mod exponential;
mod fixed;
mod grouping;
mod significant;

use crate::error::Result;
use crate::locale::{LocaleSymbols, LocaleTable};
use crate::types::FormatSpec;

use exponential::format_exponential;
use fixed::format_fixed;
use grouping::group_integer;
use significant::split_significant;

/// How a single value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// NaN or an infinity, shown with the locale symbol
    Special,
    /// The subpattern has no numeric core
    Literal,
    Exponential,
    Significant,
    Fixed,
}

impl Strategy {
    fn select(spec: &FormatSpec, scaled: f64) -> Self {
        if !scaled.is_finite() {
            Strategy::Special
        } else if spec.literal {
            Strategy::Literal
        } else if spec.exponent {
            Strategy::Exponential
        } else if spec.significance {
            Strategy::Significant
        } else {
            Strategy::Fixed
        }
    }
}

/// Format a number with a compiled pattern and locale symbols
///
/// # Arguments
/// * `spec` - The compiled pattern
/// * `locale` - Symbols for separators, signs and special values
/// * `value` - The numeric value to format
///
/// # Returns
/// * `String` - The formatted number string
///
/// # Examples
/// ```
/// use ldml_number_format::{compile, format, LocaleSymbols};
///
/// let spec = compile("#,##0.00").unwrap();
/// assert_eq!(format(&spec, &LocaleSymbols::default(), 1234.5), "1,234.50");
/// ```
pub fn format(spec: &FormatSpec, locale: &LocaleSymbols, value: f64) -> String {
    if value == 0.0 {
        if let Some(zero) = &spec.zero {
            return format(zero, locale, value);
        }
    }

    let sign = usize::from(value < 0.0);
    let scaled = value * f64::from(spec.scale);

    let mut integer = String::new();
    let mut fraction = String::new();
    let mut exponent = None;

    match Strategy::select(spec, scaled) {
        Strategy::Special => {
            integer = if scaled.is_nan() {
                locale.nan_symbol.clone()
            } else {
                locale.infinity_symbol.clone()
            };
        }
        Strategy::Literal => {}
        Strategy::Exponential => {
            let digits = format_exponential(scaled, spec, locale);
            integer = digits.mantissa.integer;
            fraction = digits.mantissa.fraction;
            exponent = Some(digits.exponent);
        }
        Strategy::Significant => {
            let digits = split_significant(scaled, spec.sig_min, spec.sig_max, spec.pad);
            integer = group(spec, locale, &digits.integer);
            fraction = digits.fraction;
        }
        Strategy::Fixed => {
            let digits = format_fixed(scaled, spec);
            integer = group(spec, locale, &digits.integer);
            fraction = digits.fraction;
        }
    }

    let mut result = String::with_capacity(
        spec.prefix[sign].len() + integer.len() + fraction.len() + spec.suffix[sign].len() + 8,
    );
    result.push_str(&spec.prefix[sign]);
    result.push_str(&integer);
    if !fraction.is_empty() {
        result.push_str(&locale.decimal_separator);
        result.push_str(&fraction);
    }
    if let Some(exponent) = exponent {
        result.push_str(&locale.exponent_symbol);
        result.push_str(&exponent);
    }
    result.push_str(&spec.suffix[sign]);
    result
}

fn group(spec: &FormatSpec, locale: &LocaleSymbols, digits: &str) -> String {
    if spec.grouping {
        group_integer(
            digits,
            spec.group_primary,
            spec.group_secondary,
            &locale.thousands_separator,
        )
    } else {
        digits.to_string()
    }
}

impl FormatSpec {
    /// Format a number, see [`format`]
    pub fn format(&self, locale: &LocaleSymbols, value: f64) -> String {
        format(self, locale, value)
    }

    /// Format a text value with the text subpattern
    ///
    /// Without a text subpattern the text is returned unchanged.
    pub fn format_text(&self, text: &str) -> String {
        match &self.text {
            Some(pattern) => pattern.render(text),
            None => text.to_string(),
        }
    }
}

/// A compiled pattern bound to the symbols of one locale
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    spec: FormatSpec,
    symbols: LocaleSymbols,
}

impl NumberFormatter {
    /// Compile `pattern` and resolve `locale_tag` from the builtin locale table
    ///
    /// # Examples
    /// ```
    /// use ldml_number_format::NumberFormatter;
    ///
    /// let formatter = NumberFormatter::new("#,##0.##", "is").unwrap();
    /// assert_eq!(formatter.format(1234567.891), "1.234.567,89");
    /// ```
    pub fn new(pattern: &str, locale_tag: &str) -> Result<Self> {
        Self::with_table(pattern, locale_tag, LocaleTable::builtin())
    }

    /// Compile `pattern` and resolve `locale_tag` from `table`
    pub fn with_table(pattern: &str, locale_tag: &str, table: &LocaleTable) -> Result<Self> {
        let spec = FormatSpec::compile(pattern)?;
        Ok(Self::from_parts(spec, table.symbols(locale_tag)))
    }

    pub fn from_parts(spec: FormatSpec, symbols: LocaleSymbols) -> Self {
        Self { spec, symbols }
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    pub fn symbols(&self) -> &LocaleSymbols {
        &self.symbols
    }

    pub fn format(&self, value: f64) -> String {
        format(&self.spec, &self.symbols, value)
    }

    pub fn format_text(&self, text: &str) -> String {
        self.spec.format_text(text)
    }
}
