//! Aggregator factory.
//!
//! Builds one HTTP quote source per configured exchange, all sharing a
//! single HTTP client, and hands them to a [`PriceAggregator`].

use std::sync::Arc;

use reqwest::Client as HttpClient;
use tracing::debug;

use crate::adapter::outbound::exchange::{
    create_http_client, Binance, Bitstamp, Coinbase, HttpQuoteSource, Kraken, Kucoin,
};
use crate::application::{PriceAggregator, RefreshLoop};
use crate::domain::ExchangeId;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::QuoteSource;

/// Build the quote source for one exchange.
#[must_use]
pub fn build_source(
    exchange: ExchangeId,
    http: HttpClient,
    base_url: &str,
) -> Arc<dyn QuoteSource> {
    match exchange {
        ExchangeId::Binance => Arc::new(HttpQuoteSource::<Binance>::new(http, base_url)),
        ExchangeId::Coinbase => Arc::new(HttpQuoteSource::<Coinbase>::new(http, base_url)),
        ExchangeId::Kraken => Arc::new(HttpQuoteSource::<Kraken>::new(http, base_url)),
        ExchangeId::Bitstamp => Arc::new(HttpQuoteSource::<Bitstamp>::new(http, base_url)),
        ExchangeId::Kucoin => Arc::new(HttpQuoteSource::<Kucoin>::new(http, base_url)),
    }
}

/// Build quote sources for every exchange, in canonical order.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_sources(config: &Config) -> Result<Vec<Arc<dyn QuoteSource>>> {
    let http = create_http_client(config.http.timeout(), &config.http.user_agent)?;

    Ok(ExchangeId::ALL
        .into_iter()
        .map(|exchange| {
            let base_url = config.exchanges.get(exchange);
            debug!(exchange = %exchange, base_url, "Building quote source");
            build_source(exchange, http.clone(), base_url)
        })
        .collect())
}

/// Build the price aggregator from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_aggregator(config: &Config) -> Result<PriceAggregator> {
    Ok(PriceAggregator::new(
        build_sources(config)?,
        config.http.timeout(),
    ))
}

/// Build the live refresh loop from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_refresh_loop(config: &Config) -> Result<RefreshLoop> {
    Ok(RefreshLoop::new(
        build_aggregator(config)?,
        config.refresh.interval(),
    ))
}
