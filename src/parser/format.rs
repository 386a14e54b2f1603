use winnow::Parser;

use crate::error::PatternError;
use crate::parser::sections::{parse_subpattern, parse_text_section};
use crate::types::*;

/// Parse a number pattern string
///
/// This is the main public API entry point of this module. It splits the
/// pattern on unquoted `;` and decomposes each subpattern. An empty pattern
/// is replaced by [`DEFAULT_PATTERN`].
///
/// # Arguments
/// * `pattern` - The pattern string to parse
///
/// # Returns
/// * `Result<ParsedPattern, PatternError>` - The parsed subpatterns, or the structural error
///
/// # Examples
/// ```
/// use ldml_number_format::parser::parse_number_pattern;
///
/// let parsed = parse_number_pattern("#,##0.00;(#,##0.00)").unwrap();
/// assert!(parsed.negative.is_some());
/// ```
pub fn parse_number_pattern(pattern: &str) -> Result<ParsedPattern, PatternError> {
    let source = if pattern.is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    };
    let mut input = source;

    let unterminated = |remaining: &str| PatternError::UnterminatedQuote {
        pattern: source.to_string(),
        position: source.len() - remaining.len(),
    };

    let positive = parse_subpattern
        .parse_next(&mut input)
        .map_err(|_| unterminated(input))?;

    let mut negative = None;
    let mut zero = None;
    let mut text = None;
    let mut count = 1;

    while let Some(rest) = input.strip_prefix(';') {
        input = rest;
        count += 1;
        match count {
            2 => {
                negative = Some(
                    parse_subpattern
                        .parse_next(&mut input)
                        .map_err(|_| unterminated(input))?,
                )
            }
            3 => {
                zero = Some(
                    parse_subpattern
                        .parse_next(&mut input)
                        .map_err(|_| unterminated(input))?,
                )
            }
            _ => {
                let section = parse_text_section
                    .parse_next(&mut input)
                    .map_err(|_| unterminated(input))?;
                if count == 4 {
                    text = Some(section);
                }
            }
        }
    }

    // Every other character is consumed, so leftovers start at a stray quote
    if !input.is_empty() {
        return Err(unterminated(input));
    }

    if count > 4 {
        return Err(PatternError::TooManySubpatterns {
            pattern: source.to_string(),
            count,
        });
    }

    Ok(ParsedPattern {
        source: source.to_string(),
        positive,
        negative,
        zero,
        text,
    })
}
