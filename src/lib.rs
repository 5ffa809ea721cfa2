//! Spreadcalc - live cross-exchange spot prices and trade P/L calculators.
//!
//! The crate is split the same way as most hexagonal trading tools:
//!
//! - [`domain`] - Pure types and the profit engine: fee-adjusted arbitrage,
//!   the all-pairs sweep, and leveraged margin P/L.
//! - [`port`] - Traits at the edges (`QuoteSource`).
//! - [`adapter`] - Exchange REST adapters (outbound) and the CLI (inbound).
//! - [`application`] - The price aggregator and the periodic refresh loop.
//! - [`infrastructure`] - Configuration, logging and component wiring.
//! - [`error`] - Error types for the crate.
//!
//! # Example
//!
//! ```
//! use spreadcalc::domain::{compute_arbitrage, FeeSpec};
//!
//! let fees = FeeSpec::new(0.1, 0.1, 10.0);
//! let result = compute_arbitrage(50_000.0, 50_500.0, 1.0, &fees);
//! assert!((result.net_profit - 389.5).abs() < 1e-9);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
