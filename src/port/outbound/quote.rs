//! Quote source port.
//!
//! Any venue that can report a spot price for a symbol implements
//! [`QuoteSource`]. The aggregator only ever talks to this trait.

use async_trait::async_trait;

use crate::domain::{ExchangeId, Symbol};
use crate::error::QuoteError;

/// A single venue's spot price feed.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// The exchange this source reports for.
    fn exchange(&self) -> ExchangeId;

    /// Fetch the latest spot price for `symbol`.
    ///
    /// Implementations perform at most one request per call and never
    /// retry. Any failure, including a body without a usable price, is an
    /// error; the caller decides how to surface it.
    async fn quote(&self, symbol: &Symbol) -> Result<f64, QuoteError>;
}
