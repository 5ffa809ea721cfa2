//! Per-exchange request and response rules.

use url::Url;

use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

/// Exchange-specific request and response rules.
pub trait TickerEndpoint: Send + Sync + 'static {
    /// The exchange these rules belong to.
    const EXCHANGE: ExchangeId;

    /// Production API root.
    const DEFAULT_BASE_URL: &'static str;

    /// Exchange-specific trading pair code for `symbol`.
    fn pair(symbol: &Symbol) -> String;

    /// Full ticker URL under `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting URL does not parse.
    fn ticker_url(base_url: &str, symbol: &Symbol) -> Result<Url, url::ParseError>;

    /// Extract the last/spot price from a response body.
    ///
    /// # Errors
    ///
    /// [`QuoteError::Decode`] if the body is not the expected JSON shape,
    /// [`QuoteError::NoPrice`] if the price field is missing or unusable.
    fn extract_price(body: &[u8]) -> Result<f64, QuoteError>;
}
