//! Trading fee schedule for an arbitrage round trip.

use serde::{Deserialize, Serialize};

/// Fees applied to a buy leg, a sell leg and the transfer between them.
///
/// Percentages apply to each leg's notional; the transfer fee is a flat
/// deduction. No sign or range checks are made, so a negative percentage
/// behaves as a rebate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSpec {
    #[serde(default)]
    pub buy_fee_pct: f64,
    #[serde(default)]
    pub sell_fee_pct: f64,
    #[serde(default)]
    pub transfer_fee_flat: f64,
}

impl FeeSpec {
    #[must_use]
    pub const fn new(buy_fee_pct: f64, sell_fee_pct: f64, transfer_fee_flat: f64) -> Self {
        Self {
            buy_fee_pct,
            sell_fee_pct,
            transfer_fee_flat,
        }
    }

    /// Fee charged on the buy leg.
    #[must_use]
    pub fn buy_fee(&self, buy_price: f64, quantity: f64) -> f64 {
        self.buy_fee_pct / 100.0 * buy_price * quantity
    }

    /// Fee charged on the sell leg.
    #[must_use]
    pub fn sell_fee(&self, sell_price: f64, quantity: f64) -> f64 {
        self.sell_fee_pct / 100.0 * sell_price * quantity
    }
}
