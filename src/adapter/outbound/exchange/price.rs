//! Lenient price field decoding shared by the exchange DTOs.

use serde::Deserialize;

/// A price as exchanges send it: usually a decimal string, sometimes a
/// bare JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    /// The price, if it is a finite positive number.
    ///
    /// Empty and non-numeric strings yield `None`.
    pub(super) fn value(&self) -> Option<f64> {
        let parsed = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        };
        parsed.filter(|p| p.is_finite() && *p > 0.0)
    }
}

/// Resolve an optional price field into a usable price.
pub(super) fn usable(field: Option<&PriceField>) -> Option<f64> {
    field.and_then(PriceField::value)
}
