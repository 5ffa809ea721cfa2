//! Multi-exchange price aggregation.
//!
//! [`PriceAggregator::fetch_snapshot`] fans out one request per exchange,
//! waits for every request to settle, and assembles a [`PriceSnapshot`].
//! A failing or slow exchange only ever costs its own quote.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{ExchangeId, ExchangeQuote, PriceSnapshot, Symbol};
use crate::error::QuoteError;
use crate::port::QuoteSource;

/// Default per-exchange bound on a single quote request.
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(8);

/// Fetches quotes from a fixed set of sources concurrently.
#[derive(Clone)]
pub struct PriceAggregator {
    sources: Vec<Arc<dyn QuoteSource>>,
    timeout: Duration,
}

impl PriceAggregator {
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn QuoteSource>>, timeout: Duration) -> Self {
        Self { sources, timeout }
    }

    /// Exchanges this aggregator queries, in registration order.
    pub fn exchanges(&self) -> impl Iterator<Item = ExchangeId> + '_ {
        self.sources.iter().map(|s| s.exchange())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one snapshot for `symbol`.
    ///
    /// Never fails: errors, timeouts and panics inside a source all become
    /// an absent quote. Each source gets exactly one attempt, bounded by
    /// the configured timeout. The capture time is taken after every
    /// request has settled.
    pub async fn fetch_snapshot(&self, symbol: &Symbol) -> PriceSnapshot {
        let started = Instant::now();

        let handles: Vec<_> = self
            .sources
            .iter()
            .map(|source| {
                let source = Arc::clone(source);
                let symbol = symbol.clone();
                let timeout = self.timeout;
                let exchange = source.exchange();
                let handle = tokio::spawn(async move {
                    match tokio::time::timeout(timeout, source.quote(&symbol)).await {
                        Ok(result) => result,
                        Err(_) => Err(QuoteError::Timeout(timeout)),
                    }
                });
                (exchange, handle)
            })
            .collect();

        let (exchanges, handles): (Vec<_>, Vec<_>) = handles.into_iter().unzip();
        let settled = join_all(handles).await;

        let quotes: Vec<ExchangeQuote> = exchanges
            .into_iter()
            .zip(settled)
            .map(|(exchange, outcome)| {
                let price = match outcome {
                    Ok(Ok(price)) => Some(price),
                    Ok(Err(QuoteError::NoPrice)) => {
                        debug!(exchange = %exchange, symbol = %symbol, "No price in response");
                        None
                    }
                    Ok(Err(error)) => {
                        warn!(exchange = %exchange, symbol = %symbol, error = %error, "Quote failed");
                        None
                    }
                    Err(join_error) => {
                        warn!(exchange = %exchange, symbol = %symbol, error = %join_error, "Quote task aborted");
                        None
                    }
                };
                ExchangeQuote { exchange, price }
            })
            .collect();

        let snapshot = PriceSnapshot::new(symbol.clone(), quotes, Utc::now());

        info!(
            symbol = %symbol,
            known = snapshot.known_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Snapshot captured"
        );

        snapshot
    }
}

impl std::fmt::Debug for PriceAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceAggregator")
            .field("exchanges", &self.exchanges().collect::<Vec<_>>())
            .field("timeout", &self.timeout)
            .finish()
    }
}
