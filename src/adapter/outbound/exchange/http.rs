//! The single HTTP round trip shared by every exchange.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::endpoint::TickerEndpoint;
use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;
use crate::port::QuoteSource;

/// Build the shared HTTP client used by every adapter.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn create_http_client(timeout: Duration, user_agent: &str) -> Result<HttpClient, reqwest::Error> {
    HttpClient::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .build()
}

/// [`QuoteSource`] that performs one GET against an exchange ticker.
pub struct HttpQuoteSource<E> {
    http: HttpClient,
    base_url: String,
    _endpoint: PhantomData<E>,
}

impl<E: TickerEndpoint> HttpQuoteSource<E> {
    /// Create a source against `base_url` (e.g. `https://api.binance.com`).
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            _endpoint: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl<E: TickerEndpoint> QuoteSource for HttpQuoteSource<E> {
    fn exchange(&self) -> ExchangeId {
        E::EXCHANGE
    }

    async fn quote(&self, symbol: &Symbol) -> Result<f64, QuoteError> {
        let url = E::ticker_url(&self.base_url, symbol)?;
        debug!(exchange = %E::EXCHANGE, url = %url, "Requesting ticker");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        E::extract_price(&body)
    }
}
