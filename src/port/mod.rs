//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the application and the outside world.
//! Outbound adapters implement them; application services consume them
//! through trait objects so tests can swap in fakes.
//!
//! ```text
//!          ┌─────────────────────────┐
//!          │      Application        │
//!          │  (PriceAggregator)      │
//!          └───────────┬─────────────┘
//!                      │ QuoteSource
//!      ┌───────┬───────┼───────┬────────┐
//!      ▼       ▼       ▼       ▼        ▼
//!  Binance Coinbase  Kraken Bitstamp  KuCoin
//! ```

pub mod outbound;

pub use outbound::quote::QuoteSource;
