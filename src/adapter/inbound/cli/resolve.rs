//! Merging command-line arguments with configured defaults.

use crate::domain::{FeeSpec, Symbol};
use crate::error::Result;
use crate::infrastructure::config::Config;

use super::command::{FeeArgs, SymbolArg};

/// Symbol named on the command line, or the configured default.
pub(crate) fn resolve_symbol(arg: &SymbolArg, config: &Config) -> Result<Symbol> {
    match arg.symbol.as_deref() {
        Some(raw) => Symbol::new(raw),
        None => Ok(config.symbol.clone()),
    }
}

/// Fee flags layered over the configured schedule.
pub(crate) fn resolve_fees(args: &FeeArgs, config: &Config) -> FeeSpec {
    let base = config.fees;
    FeeSpec::new(
        args.buy_fee.unwrap_or(base.buy_fee_pct),
        args.sell_fee.unwrap_or(base.sell_fee_pct),
        args.transfer_fee.unwrap_or(base.transfer_fee_flat),
    )
}
