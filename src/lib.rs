//! Locale-aware decimal number formatting with LDML number patterns
//!
//! A pattern such as `#,##0.00;(#,##0.00)` is compiled once into a
//! [`FormatSpec`], which then formats any number of values with the symbols
//! of a locale.
//!
//! ```
//! use ldml_number_format::{compile, LocaleTable};
//!
//! let spec = compile("#,##0.##").unwrap();
//! let symbols = LocaleTable::builtin().symbols("is");
//! assert_eq!(spec.format(&symbols, 1234567.891), "1.234.567,89");
//! assert_eq!(spec.format(&symbols, -0.5), "-0,5");
//! ```

pub mod compiler;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod rounding;
pub mod types;

// 导出主要 API
pub use compiler::compile;
pub use error::{PatternError, Result};
pub use formatter::{NumberFormatter, format};
pub use locale::{LocaleError, LocaleSymbols, LocaleTable, PartialLocaleSymbols, locale_symbols};
pub use parser::parse_number_pattern;
pub use rounding::round_half_even;
pub use types::*;

#[cfg(test)]
mod tests;
