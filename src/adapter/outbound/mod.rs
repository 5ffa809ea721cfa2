//! Outbound adapters (driven side).

pub mod exchange;
