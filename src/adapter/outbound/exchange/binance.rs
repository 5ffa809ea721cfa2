//! Binance spot ticker: `GET /api/v3/ticker/price?symbol=BTCUSDT`.

use serde::Deserialize;
use url::Url;

use super::price::{usable, PriceField};
use super::TickerEndpoint;
use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: Option<PriceField>,
}

/// Binance USDT-quoted spot pairs.
pub struct Binance;

impl TickerEndpoint for Binance {
    const EXCHANGE: ExchangeId = ExchangeId::Binance;
    const DEFAULT_BASE_URL: &'static str = "https://api.binance.com";

    fn pair(symbol: &Symbol) -> String {
        format!("{symbol}USDT")
    }

    fn ticker_url(base_url: &str, symbol: &Symbol) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{base_url}/api/v3/ticker/price"))?;
        url.query_pairs_mut().append_pair("symbol", &Self::pair(symbol));
        Ok(url)
    }

    fn extract_price(body: &[u8]) -> Result<f64, QuoteError> {
        let ticker: TickerPrice = serde_json::from_slice(body)?;
        usable(ticker.price.as_ref()).ok_or(QuoteError::NoPrice)
    }
}
