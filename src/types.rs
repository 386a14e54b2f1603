//! Type definitions for the number pattern compiler
//!
//! This module defines the type system used to represent lexed patterns and
//! the compiled, immutable formatting rule derived from them.

use std::fmt;

/// The pattern used when an empty pattern string is compiled
pub const DEFAULT_PATTERN: &str = "#,##0.###;-#,##0.###;0;@";

/// Kind of digit placeholder found in a numeric core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitKind {
    /// Literal digit (`0`-`9`) that always produces a digit
    Required(char),
    /// Optional digit (`#`) that is dropped when not needed
    Optional,
    /// Significant digit (`@`)
    Significant,
}

/// A single token of a numeric core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// A digit placeholder
    Digit(DigitKind),
    /// Decimal point (.)
    DecimalPoint,
    /// Grouping separator (,)
    Grouping,
    /// Exponent marker, `E` or `E+`, followed by the minimum exponent digits
    Exponent { plus: bool, min_digits: usize },
}

impl PatternToken {
    /// Checks if the token produces a digit in the output
    pub fn is_digit(&self) -> bool {
        matches!(self, PatternToken::Digit(_))
    }

    /// Checks if the token is a literal digit (`0`-`9`)
    pub fn is_required_digit(&self) -> bool {
        matches!(self, PatternToken::Digit(DigitKind::Required(_)))
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternToken::Digit(DigitKind::Required(c)) => write!(f, "{c}"),
            PatternToken::Digit(DigitKind::Optional) => f.write_str("#"),
            PatternToken::Digit(DigitKind::Significant) => f.write_str("@"),
            PatternToken::DecimalPoint => f.write_str("."),
            PatternToken::Grouping => f.write_str(","),
            PatternToken::Exponent { plus, min_digits } => {
                f.write_str("E")?;
                if *plus {
                    f.write_str("+")?;
                }
                for _ in 0..*min_digits {
                    f.write_str("0")?;
                }
                Ok(())
            }
        }
    }
}

/// Renders a run of tokens back to pattern syntax
pub fn render_tokens(tokens: &[PatternToken]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

/// A piece of prefix or suffix text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixPart {
    /// Literal text, with quotes already removed
    Text(String),
    /// Unquoted percent sign (%), scales the value by 100
    Percent,
    /// Unquoted per-mille sign (‰), scales the value by 1000
    PerMille,
}

/// Renders prefix or suffix parts to the text they display
pub fn render_affix(parts: &[AffixPart]) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            AffixPart::Text(text) => out.push_str(text),
            AffixPart::Percent => out.push('%'),
            AffixPart::PerMille => out.push('‰'),
        }
    }
    out
}

/// One `;`-delimited branch of a pattern: prefix, numeric core, suffix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Subpattern {
    /// The raw text of this subpattern
    pub source: String,
    /// Literal text before the numeric core
    pub prefix: Vec<AffixPart>,
    /// The numeric core; empty for a literal subpattern
    pub core: Vec<PatternToken>,
    /// Literal text after the numeric core
    pub suffix: Vec<AffixPart>,
}

impl Subpattern {
    /// Checks if this subpattern has no numeric core
    pub fn is_literal(&self) -> bool {
        self.core.is_empty()
    }

    /// Checks if an unquoted percent sign appears in the prefix or suffix
    pub fn has_percent(&self) -> bool {
        self.affix_parts().any(|p| matches!(p, AffixPart::Percent))
    }

    /// Checks if an unquoted per-mille sign appears in the prefix or suffix
    pub fn has_permille(&self) -> bool {
        self.affix_parts().any(|p| matches!(p, AffixPart::PerMille))
    }

    fn affix_parts(&self) -> impl Iterator<Item = &AffixPart> {
        self.prefix.iter().chain(self.suffix.iter())
    }
}

/// A piece of a text subpattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPart {
    /// Literal text
    Literal(String),
    /// Text value placeholder (@)
    Placeholder,
}

/// The fourth subpattern, applied to text values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextPattern {
    pub parts: Vec<TextPart>,
}

impl TextPattern {
    /// Substitutes `text` for every placeholder
    pub fn render(&self, text: &str) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TextPart::Literal(literal) => out.push_str(literal),
                TextPart::Placeholder => out.push_str(text),
            }
        }
        out
    }
}

/// Represents a complete pattern split into its subpatterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// The pattern source that was parsed
    pub source: String,
    /// Positive subpattern (required)
    pub positive: Subpattern,
    /// Negative subpattern (optional)
    pub negative: Option<Subpattern>,
    /// Zero value subpattern (optional)
    pub zero: Option<Subpattern>,
    /// Text subpattern (optional)
    pub text: Option<TextPattern>,
}

/// A compiled formatting rule
///
/// Produced once per pattern by [`FormatSpec::compile`] and read-only after
/// that. Upper bounds use `None` for "no limit". Index 0 of `prefix` and
/// `suffix` is the positive branch, index 1 the negative branch.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct FormatSpec {
    pub pattern: String,
    pub significance: bool,
    pub exponent: bool,
    pub grouping: bool,
    pub exp_plus: bool,
    /// The positive subpattern has no numeric core and renders only its affixes
    pub literal: bool,
    pub int_min: usize,
    pub int_max: Option<usize>,
    pub frac_min: usize,
    pub frac_max: usize,
    pub sig_min: usize,
    pub sig_max: Option<usize>,
    pub exp_min: usize,
    pub group_primary: usize,
    pub group_secondary: usize,
    pub prefix: [String; 2],
    pub suffix: [String; 2],
    pub pad: char,
    pub scale: u32,
    /// Rule used for values equal to zero
    pub zero: Option<Box<FormatSpec>>,
    /// Template used by [`FormatSpec::format_text`]
    pub text: Option<TextPattern>,
}
