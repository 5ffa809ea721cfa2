//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! - [`config`] - Configuration loading, validation and logging setup
//! - [`factory`] - Wiring of exchange adapters into the aggregator

pub mod config;
pub mod factory;
