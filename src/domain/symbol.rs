//! Normalized asset symbol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Uppercase trading symbol of the base asset (e.g. `BTC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Normalize and validate a raw symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] if the trimmed input is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidSymbol {
                symbol: raw.to_string(),
                reason: "symbol cannot be empty",
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidSymbol {
                symbol: raw.to_string(),
                reason: "only ASCII letters and digits are allowed",
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form, for exchanges that key pairs in lowercase.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self("BTC".to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
