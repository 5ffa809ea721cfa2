//! KuCoin level-1 book: `GET /api/v1/market/orderbook/level1?symbol=BTC-USDT`.

use serde::Deserialize;
use url::Url;

use super::price::{usable, PriceField};
use super::TickerEndpoint;
use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

#[derive(Debug, Deserialize)]
struct Level1Response {
    data: Option<Level1>,
}

#[derive(Debug, Deserialize)]
struct Level1 {
    price: Option<PriceField>,
}

/// KuCoin USDT-quoted spot pairs.
pub struct Kucoin;

impl TickerEndpoint for Kucoin {
    const EXCHANGE: ExchangeId = ExchangeId::Kucoin;
    const DEFAULT_BASE_URL: &'static str = "https://api.kucoin.com";

    fn pair(symbol: &Symbol) -> String {
        format!("{symbol}-USDT")
    }

    fn ticker_url(base_url: &str, symbol: &Symbol) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{base_url}/api/v1/market/orderbook/level1"))?;
        url.query_pairs_mut().append_pair("symbol", &Self::pair(symbol));
        Ok(url)
    }

    fn extract_price(body: &[u8]) -> Result<f64, QuoteError> {
        let response: Level1Response = serde_json::from_slice(body)?;
        let price = response.data.as_ref().and_then(|d| d.price.as_ref());
        usable(price).ok_or(QuoteError::NoPrice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_dash_usdt_pair_url() {
        let url = Kucoin::ticker_url(Kucoin::DEFAULT_BASE_URL, &Symbol::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.kucoin.com/api/v1/market/orderbook/level1?symbol=BTC-USDT"
        );
    }

    #[test]
    fn extracts_nested_price() {
        let body = br#"{"code":"200000","data":{"sequence":"1","price":"50050.3","size":"0.1"}}"#;
        assert_eq!(Kucoin::extract_price(body).unwrap(), 50_050.3);
    }

    #[test]
    fn null_data_has_no_price() {
        let body = br#"{"code":"200000","data":null}"#;
        assert!(matches!(Kucoin::extract_price(body), Err(QuoteError::NoPrice)));
    }
}
