//! Locale support for number formatting
//!
//! This module holds the separator and symbol table consulted by the
//! formatter. The table is an immutable value: adding a locale returns an
//! extended table. Missing fields fall back to the `en` defaults one by one.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::{trace, warn};

/// Error type for locale operations
#[derive(Debug, Error)]
pub enum LocaleError {
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    Parse(#[from] toml::de::Error),
    /// A symbol was given as an empty string
    #[error("Locale {tag} has an empty {field}")]
    EmptySymbol { tag: String, field: &'static str },
}

type Result<T> = std::result::Result<T, LocaleError>;

/// Separators and symbols for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSymbols {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub positive_sign: String,
    pub negative_sign: String,
    pub exponent_symbol: String,
    pub infinity_symbol: String,
    pub nan_symbol: String,
}

impl Default for LocaleSymbols {
    /// The `en` symbols
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            positive_sign: "+".to_string(),
            negative_sign: "-".to_string(),
            exponent_symbol: "E".to_string(),
            infinity_symbol: "∞".to_string(),
            nan_symbol: "☹".to_string(),
        }
    }
}

/// Locale symbols where every field is optional
///
/// This is the shape of a locale entry in TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialLocaleSymbols {
    pub thousands_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub positive_sign: Option<String>,
    pub negative_sign: Option<String>,
    pub exponent_symbol: Option<String>,
    pub infinity_symbol: Option<String>,
    pub nan_symbol: Option<String>,
}

impl PartialLocaleSymbols {
    fn fields(&self) -> [(&'static str, &Option<String>); 7] {
        [
            ("thousands_separator", &self.thousands_separator),
            ("decimal_separator", &self.decimal_separator),
            ("positive_sign", &self.positive_sign),
            ("negative_sign", &self.negative_sign),
            ("exponent_symbol", &self.exponent_symbol),
            ("infinity_symbol", &self.infinity_symbol),
            ("nan_symbol", &self.nan_symbol),
        ]
    }

    fn validate(&self, tag: &str) -> Result<()> {
        for (field, value) in self.fields() {
            if value.as_deref() == Some("") {
                return Err(LocaleError::EmptySymbol {
                    tag: tag.to_string(),
                    field,
                });
            }
        }
        Ok(())
    }

    /// Fill each missing or empty field from `fallback`
    pub fn resolve(&self, fallback: &LocaleSymbols) -> LocaleSymbols {
        fn pick(value: &Option<String>, fallback: &str) -> String {
            match value.as_deref() {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => fallback.to_string(),
            }
        }

        LocaleSymbols {
            thousands_separator: pick(&self.thousands_separator, &fallback.thousands_separator),
            decimal_separator: pick(&self.decimal_separator, &fallback.decimal_separator),
            positive_sign: pick(&self.positive_sign, &fallback.positive_sign),
            negative_sign: pick(&self.negative_sign, &fallback.negative_sign),
            exponent_symbol: pick(&self.exponent_symbol, &fallback.exponent_symbol),
            infinity_symbol: pick(&self.infinity_symbol, &fallback.infinity_symbol),
            nan_symbol: pick(&self.nan_symbol, &fallback.nan_symbol),
        }
    }
}

impl From<LocaleSymbols> for PartialLocaleSymbols {
    fn from(symbols: LocaleSymbols) -> Self {
        Self {
            thousands_separator: Some(symbols.thousands_separator),
            decimal_separator: Some(symbols.decimal_separator),
            positive_sign: Some(symbols.positive_sign),
            negative_sign: Some(symbols.negative_sign),
            exponent_symbol: Some(symbols.exponent_symbol),
            infinity_symbol: Some(symbols.infinity_symbol),
            nan_symbol: Some(symbols.nan_symbol),
        }
    }
}

/// Lowercase a tag and use `-` between subtags
fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// A table of locale symbols keyed by locale tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    locales: HashMap<String, PartialLocaleSymbols>,
}

// Global table built from the embedded locale data
static BUILTIN_TABLE: OnceLock<LocaleTable> = OnceLock::new();

impl LocaleTable {
    /// An empty table; every tag resolves to the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// The table built from the embedded locale data
    pub fn builtin() -> &'static Self {
        BUILTIN_TABLE.get_or_init(|| {
            let locale_toml = include_str!("locale/locales.toml");
            Self::from_toml_str(locale_toml).unwrap_or_else(|e| {
                warn!(error = %e, "failed to load embedded locale data");
                Self::new()
            })
        })
    }

    /// Parse a table from TOML with one table per locale tag
    ///
    /// # Examples
    /// ```
    /// use ldml_number_format::LocaleTable;
    ///
    /// let table = LocaleTable::from_toml_str(r#"
    ///     [de]
    ///     thousands_separator = "."
    ///     decimal_separator = ","
    /// "#).unwrap();
    /// assert_eq!(table.symbols("de").decimal_separator, ",");
    /// assert_eq!(table.symbols("de").nan_symbol, "☹");
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let entries: HashMap<String, PartialLocaleSymbols> = toml::from_str(toml_str)?;

        let mut table = Self::new();
        for (tag, symbols) in entries {
            symbols.validate(&tag)?;
            table.locales.insert(normalize_tag(&tag), symbols);
        }
        Ok(table)
    }

    /// Return a table extended with `symbols` for `tag`, replacing any entry
    /// already registered for it
    pub fn with_locale(mut self, tag: &str, symbols: impl Into<PartialLocaleSymbols>) -> Self {
        self.locales.insert(normalize_tag(tag), symbols.into());
        self
    }

    /// Return a table holding both sets of entries; `other` wins on conflicts
    pub fn merge(mut self, other: LocaleTable) -> Self {
        self.locales.extend(other.locales);
        self
    }

    /// Checks if an entry exists for exactly this tag
    pub fn contains(&self, tag: &str) -> bool {
        self.locales.contains_key(&normalize_tag(tag))
    }

    /// List the registered locale tags
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Find the entry for `tag`, falling back to its primary language subtag
    fn lookup(&self, tag: &str) -> Option<&PartialLocaleSymbols> {
        let normalized = normalize_tag(tag);
        if let Some(entry) = self.locales.get(&normalized) {
            return Some(entry);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        let entry = self.locales.get(language);
        if entry.is_some() {
            trace!(tag, language, "locale resolved by language subtag");
        }
        entry
    }

    /// Resolve the symbols for `tag`
    ///
    /// Unknown tags, and fields a registered locale leaves out, use the `en`
    /// defaults.
    pub fn symbols(&self, tag: &str) -> LocaleSymbols {
        let defaults = LocaleSymbols::default();
        match self.lookup(tag) {
            Some(entry) => entry.resolve(&defaults),
            None => {
                trace!(tag, "locale not registered, using defaults");
                defaults
            }
        }
    }
}

/// Resolve the symbols for `tag` from the builtin table
pub fn locale_symbols(tag: &str) -> LocaleSymbols {
    LocaleTable::builtin().symbols(tag)
}
