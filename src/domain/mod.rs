//! Exchange-agnostic domain logic.

mod arbitrage;
mod exchange;
mod fee;
mod margin;
mod snapshot;
mod symbol;

pub mod error;
pub mod input;

pub use arbitrage::{
    best_opportunity, compute_all_opportunities, compute_arbitrage, rank_by_net_profit,
    ArbitrageOpportunity, ArbitrageResult,
};
pub use exchange::ExchangeId;
pub use fee::FeeSpec;
pub use margin::{compute_margin_pnl, MarginOutcome, MarginPosition, PositionSide};
pub use snapshot::{ExchangeQuote, PriceSnapshot};
pub use symbol::Symbol;
