use winnow::combinator::alt;
use winnow::token::none_of;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Characters that may start a numeric core
pub const CORE_START: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '@', '#', '.', ',',
];

fn ends_affix(c: char, in_prefix: bool) -> bool {
    c == ';' || c == '\'' || (in_prefix && CORE_START.contains(&c))
}

/// Parse one piece of prefix or suffix text
///
/// A prefix stops at the first character that can start a numeric core; a
/// suffix runs to the end of the subpattern.
pub fn parse_affix_part(in_prefix: bool) -> impl FnMut(&mut &str) -> ModalResult<AffixPart> {
    move |input: &mut &str| {
        alt((
            parse_escaped_quote.map(AffixPart::Text),
            parse_quoted_text.map(AffixPart::Text),
            parse_percent,
            parse_permille,
            none_of(move |c: char| ends_affix(c, in_prefix))
                .map(|c: char| AffixPart::Text(c.to_string())),
        ))
        .parse_next(input)
    }
}

/// Parse a digit placeholder or grouping separator
pub fn parse_core_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_required_digit,
        parse_optional_digit,
        parse_significant_digit,
        parse_grouping_separator,
    ))
    .parse_next(input)
}

/// Parse one piece of a text subpattern
pub fn parse_text_part(input: &mut &str) -> ModalResult<TextPart> {
    alt((
        parse_escaped_quote.map(TextPart::Literal),
        parse_quoted_text.map(TextPart::Literal),
        parse_text_placeholder,
        none_of([';', '\'']).map(|c: char| TextPart::Literal(c.to_string())),
    ))
    .parse_next(input)
}
