use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::token::{literal, none_of, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Digit placeholders
pub fn parse_required_digit(input: &mut &str) -> ModalResult<PatternToken> {
    one_of('0'..='9')
        .map(|c: char| PatternToken::Digit(DigitKind::Required(c)))
        .parse_next(input)
}

pub fn parse_optional_digit(input: &mut &str) -> ModalResult<PatternToken> {
    literal("#")
        .value(PatternToken::Digit(DigitKind::Optional))
        .parse_next(input)
}

pub fn parse_significant_digit(input: &mut &str) -> ModalResult<PatternToken> {
    literal("@")
        .value(PatternToken::Digit(DigitKind::Significant))
        .parse_next(input)
}

// Separators
pub fn parse_decimal_point(input: &mut &str) -> ModalResult<PatternToken> {
    literal(".")
        .value(PatternToken::DecimalPoint)
        .parse_next(input)
}

pub fn parse_grouping_separator(input: &mut &str) -> ModalResult<PatternToken> {
    literal(",").value(PatternToken::Grouping).parse_next(input)
}

/// Parse `E`, an optional `+`, and the minimum exponent digits
pub fn parse_exponent(input: &mut &str) -> ModalResult<PatternToken> {
    preceded(
        literal("E"),
        (opt(literal("+")), take_while(0.., '0'..='9')),
    )
    .map(|(plus, digits): (Option<&str>, &str)| PatternToken::Exponent {
        plus: plus.is_some(),
        min_digits: digits.len(),
    })
    .parse_next(input)
}

// Scaling symbols
pub fn parse_percent(input: &mut &str) -> ModalResult<AffixPart> {
    literal("%").value(AffixPart::Percent).parse_next(input)
}

pub fn parse_permille(input: &mut &str) -> ModalResult<AffixPart> {
    literal("‰").value(AffixPart::PerMille).parse_next(input)
}

// Literal text
pub fn parse_text_placeholder(input: &mut &str) -> ModalResult<TextPart> {
    literal("@").value(TextPart::Placeholder).parse_next(input)
}

/// A doubled quote outside a quoted run stands for one quote
pub fn parse_escaped_quote(input: &mut &str) -> ModalResult<String> {
    literal("''").map(|_| "'".to_string()).parse_next(input)
}

pub fn parse_quoted_text(input: &mut &str) -> ModalResult<String> {
    let content_parser = repeat(0.., alt((literal("''").value('\''), none_of(['\'']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content_parser, '\'').parse_next(input)
}
