//! CLI module graph.

pub mod arbitrage;
pub mod command;
pub mod config;
pub mod margin;
pub mod output;
pub mod prices;
pub mod resolve;
pub mod sweep;
pub mod watch;
