//! Application services (use cases).
//!
//! These services coordinate ports to implement the application's use
//! cases; the profit engine itself lives in [`crate::domain`].

pub mod aggregator;
pub mod refresh;

pub use aggregator::PriceAggregator;
pub use refresh::RefreshLoop;
