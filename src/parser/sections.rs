use winnow::combinator::{opt, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::combinators::{parse_affix_part, parse_core_token, parse_text_part};
use crate::parser::tokens::{parse_decimal_point, parse_exponent};
use crate::types::*;

/// Parse the numeric core of a subpattern
///
/// The core is an integer run, an optional `.` with a fraction run, and an
/// optional exponent marker. Returns an empty token list when the input
/// holds no numeric core.
pub fn parse_number_core(input: &mut &str) -> ModalResult<Vec<PatternToken>> {
    let mut tokens: Vec<PatternToken> = repeat(0.., parse_core_token).parse_next(input)?;

    if let Some(point) = opt(parse_decimal_point).parse_next(input)? {
        tokens.push(point);
        let fraction: Vec<PatternToken> = repeat(0.., parse_core_token).parse_next(input)?;
        tokens.extend(fraction);
    }

    if tokens.is_empty() {
        return Ok(tokens);
    }

    if let Some(exponent) = opt(parse_exponent).parse_next(input)? {
        tokens.push(exponent);
    }

    Ok(tokens)
}

/// Parse a single subpattern into prefix, numeric core and suffix
pub fn parse_subpattern(input: &mut &str) -> ModalResult<Subpattern> {
    let start = *input;

    let prefix: Vec<AffixPart> = repeat(0.., parse_affix_part(true)).parse_next(input)?;
    let core = parse_number_core(input)?;
    let suffix: Vec<AffixPart> = repeat(0.., parse_affix_part(false)).parse_next(input)?;

    let consumed = start.len() - input.len();
    Ok(Subpattern {
        source: start[..consumed].to_string(),
        prefix: merge_affix_text(prefix),
        core,
        suffix: merge_affix_text(suffix),
    })
}

/// Parse a text subpattern, where `@` stands for the text value
pub fn parse_text_section(input: &mut &str) -> ModalResult<TextPattern> {
    let parts: Vec<TextPart> = repeat(0.., parse_text_part).parse_next(input)?;

    let mut merged: Vec<TextPart> = Vec::with_capacity(parts.len());
    for part in parts {
        if let (Some(TextPart::Literal(prev)), TextPart::Literal(text)) = (merged.last_mut(), &part) {
            prev.push_str(text);
            continue;
        }
        merged.push(part);
    }

    Ok(TextPattern { parts: merged })
}

/// Join adjacent text pieces so each literal run is one part
fn merge_affix_text(parts: Vec<AffixPart>) -> Vec<AffixPart> {
    let mut merged: Vec<AffixPart> = Vec::with_capacity(parts.len());
    for part in parts {
        if let (Some(AffixPart::Text(prev)), AffixPart::Text(text)) = (merged.last_mut(), &part) {
            prev.push_str(text);
            continue;
        }
        merged.push(part);
    }
    merged
}
