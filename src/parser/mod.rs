//! Number pattern parsing module
//!
//! This module is responsible for lexing pattern strings into subpatterns made
//! of literal affixes and numeric-core tokens.
//! The main entry point is the `parse_number_pattern` function.

mod combinators;
mod format;
mod sections;
mod tokens;

pub use format::parse_number_pattern;
