//! Bitstamp ticker: `GET /api/v2/ticker/btcusd/`.

use serde::Deserialize;
use url::Url;

use super::price::{usable, PriceField};
use super::TickerEndpoint;
use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

#[derive(Debug, Deserialize)]
struct Ticker {
    last: Option<PriceField>,
}

/// Bitstamp USD-quoted pairs, keyed in lowercase.
pub struct Bitstamp;

impl TickerEndpoint for Bitstamp {
    const EXCHANGE: ExchangeId = ExchangeId::Bitstamp;
    const DEFAULT_BASE_URL: &'static str = "https://www.bitstamp.net";

    fn pair(symbol: &Symbol) -> String {
        format!("{}usd", symbol.to_lowercase())
    }

    fn ticker_url(base_url: &str, symbol: &Symbol) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{base_url}/api/v2/ticker/{}/", Self::pair(symbol)))
    }

    fn extract_price(body: &[u8]) -> Result<f64, QuoteError> {
        let ticker: Ticker = serde_json::from_slice(body)?;
        usable(ticker.last.as_ref()).ok_or(QuoteError::NoPrice)
    }
}
