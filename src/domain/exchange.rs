//! The fixed set of exchanges quoted by the aggregator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for one of the supported spot exchanges.
///
/// The derived ordering is the canonical enumeration order used by the
/// all-pairs sweep and by every rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeId {
    Binance,
    Coinbase,
    Kraken,
    Bitstamp,
    Kucoin,
}

impl ExchangeId {
    /// All exchanges in canonical order.
    pub const ALL: [ExchangeId; 5] = [
        Self::Binance,
        Self::Coinbase,
        Self::Kraken,
        Self::Bitstamp,
        Self::Kucoin,
    ];

    /// Lowercase name used as the snapshot key and in labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binance => "binance",
            Self::Coinbase => "coinbase",
            Self::Kraken => "kraken",
            Self::Bitstamp => "bitstamp",
            Self::Kucoin => "kucoin",
        }
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExchangeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.name() == needle)
            .ok_or_else(|| format!("unknown exchange '{s}'"))
    }
}
