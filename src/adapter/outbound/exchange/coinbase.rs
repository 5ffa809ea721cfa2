//! Coinbase spot price: `GET /v2/prices/BTC-USD/spot`.

use serde::Deserialize;
use url::Url;

use super::price::{usable, PriceField};
use super::TickerEndpoint;
use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

#[derive(Debug, Deserialize)]
struct SpotResponse {
    data: Option<SpotData>,
}

#[derive(Debug, Deserialize)]
struct SpotData {
    amount: Option<PriceField>,
}

/// Coinbase USD-quoted spot prices.
pub struct Coinbase;

impl TickerEndpoint for Coinbase {
    const EXCHANGE: ExchangeId = ExchangeId::Coinbase;
    const DEFAULT_BASE_URL: &'static str = "https://api.coinbase.com";

    fn pair(symbol: &Symbol) -> String {
        format!("{symbol}-USD")
    }

    fn ticker_url(base_url: &str, symbol: &Symbol) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{base_url}/v2/prices/{}/spot", Self::pair(symbol)))
    }

    fn extract_price(body: &[u8]) -> Result<f64, QuoteError> {
        let response: SpotResponse = serde_json::from_slice(body)?;
        let amount = response.data.as_ref().and_then(|d| d.amount.as_ref());
        usable(amount).ok_or(QuoteError::NoPrice)
    }
}
