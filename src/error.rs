//! Error types for pattern compilation

use thiserror::Error;

/// Errors raised while compiling a pattern. Formatting never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A literal digit is followed by `#` in the integer part
    #[error("Nonsensical integer pattern: {fragment}")]
    MalformedIntegerPattern { fragment: String },

    /// A `#` is followed by a literal digit in the fraction part
    #[error("Nonsensical fraction pattern: {fragment}")]
    MalformedFractionPattern { fragment: String },

    #[error("Exponential patterns must not contain grouping: {fragment}")]
    ExponentWithGrouping { fragment: String },

    #[error("Significant digit patterns must not contain a decimal point: {fragment}")]
    SignificanceWithDecimalPoint { fragment: String },

    #[error("Significant digit patterns must not contain \"0\": {fragment}")]
    SignificanceWithLiteralZero { fragment: String },

    /// A quoted literal is never closed
    #[error("Unterminated quote at offset {position} in pattern: {pattern}")]
    UnterminatedQuote { pattern: String, position: usize },

    #[error("Pattern has {count} subpatterns, at most 4 are allowed: {pattern}")]
    TooManySubpatterns { pattern: String, count: usize },
}

/// Result type for pattern compilation
pub type Result<T> = std::result::Result<T, PatternError>;
