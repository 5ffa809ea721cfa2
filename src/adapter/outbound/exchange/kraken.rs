//! Kraken public ticker: `GET /0/public/Ticker?pair=XBTUSD`.
//!
//! The result is keyed by Kraken's own pair name (`XXBTZUSD` for
//! `XBTUSD`), so the first entry of the map is taken whatever its key.

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use url::Url;

use super::price::{usable, PriceField};
use super::TickerEndpoint;
use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

#[derive(Debug, Deserialize)]
struct TickerResponse {
    #[serde(default, deserialize_with = "first_entry")]
    result: Option<PairTicker>,
}

#[derive(Debug, Deserialize)]
struct PairTicker {
    /// Last trade closed: `[price, lot volume]`.
    c: Option<Vec<PriceField>>,
}

/// Keep the first value of a JSON object, skipping the rest.
fn first_entry<'de, D>(deserializer: D) -> Result<Option<PairTicker>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FirstEntry;

    impl<'de> Visitor<'de> for FirstEntry {
        type Value = Option<PairTicker>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of pair name to ticker")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let first = map
                .next_entry::<IgnoredAny, PairTicker>()?
                .map(|(_, ticker)| ticker);
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(first)
        }
    }

    deserializer.deserialize_any(FirstEntry)
}

/// Kraken USD-quoted pairs. Bitcoin trades under the `XBT` asset code.
pub struct Kraken;

impl TickerEndpoint for Kraken {
    const EXCHANGE: ExchangeId = ExchangeId::Kraken;
    const DEFAULT_BASE_URL: &'static str = "https://api.kraken.com";

    fn pair(symbol: &Symbol) -> String {
        match symbol.as_str() {
            "BTC" => "XBTUSD".to_string(),
            other => format!("{other}USD"),
        }
    }

    fn ticker_url(base_url: &str, symbol: &Symbol) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{base_url}/0/public/Ticker"))?;
        url.query_pairs_mut().append_pair("pair", &Self::pair(symbol));
        Ok(url)
    }

    fn extract_price(body: &[u8]) -> Result<f64, QuoteError> {
        let response: TickerResponse = serde_json::from_slice(body)?;
        let last = response
            .result
            .as_ref()
            .and_then(|t| t.c.as_ref())
            .and_then(|c| c.first());
        usable(last).ok_or(QuoteError::NoPrice)
    }
}
