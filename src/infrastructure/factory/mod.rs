//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`aggregator`] - Exchange adapters, HTTP client and price aggregator

pub mod aggregator;

pub use aggregator::{build_aggregator, build_refresh_loop, build_source, build_sources};
