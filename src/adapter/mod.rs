//! Implementations of ports (hexagonal adapters).
//!
//! - [`outbound`] - Driven adapters: exchange ticker clients.
//! - [`inbound`] - Driving adapters: the command-line interface.

pub mod inbound;
pub mod outbound;
