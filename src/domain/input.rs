//! Validation of caller-supplied numbers before the profit engine runs.
//!
//! Required inputs treat zero the same as a missing value: a zero buy
//! price, entry, margin or leverage means "not entered" and the
//! computation is skipped. This is deliberate and explicit here rather
//! than hidden in truthiness checks at the call site.
//!
//! Quantity and fee percentages are not required inputs and pass through
//! unvalidated.

use super::error::InputError;
use super::margin::{MarginPosition, PositionSide};

/// Return the value if present, finite and non-zero.
///
/// # Errors
///
/// [`InputError::Missing`] for `None` or zero, [`InputError::NonFinite`]
/// for NaN and infinities.
pub fn require_present(field: &'static str, value: Option<f64>) -> Result<f64, InputError> {
    match value {
        None => Err(InputError::Missing { field }),
        Some(v) if !v.is_finite() => Err(InputError::NonFinite { field, value: v }),
        Some(v) if v == 0.0 => Err(InputError::Missing { field }),
        Some(v) => Ok(v),
    }
}

/// Validated buy/sell prices for a manual single-pair calculation.
///
/// # Errors
///
/// Fails if either price is absent, zero or non-finite.
pub fn manual_prices(buy: Option<f64>, sell: Option<f64>) -> Result<(f64, f64), InputError> {
    Ok((
        require_present("buy price", buy)?,
        require_present("sell price", sell)?,
    ))
}

/// Raw margin calculator inputs, as typed by a user.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginInput {
    pub entry: Option<f64>,
    pub take_profit: Option<f64>,
    pub stop_loss: Option<f64>,
    pub margin_amount: Option<f64>,
    pub leverage: Option<f64>,
    pub side: PositionSide,
}

impl MarginInput {
    /// Validate into a [`MarginPosition`].
    ///
    /// Entry, margin and leverage are required. Missing exit levels default
    /// to the entry price, which yields zero P/L for that exit.
    ///
    /// # Errors
    ///
    /// Fails if a required input is absent, zero or non-finite, or an exit
    /// level is non-finite.
    pub fn validate(&self) -> Result<MarginPosition, InputError> {
        let entry = require_present("entry price", self.entry)?;
        let margin_amount = require_present("margin amount", self.margin_amount)?;
        let leverage = require_present("leverage", self.leverage)?;
        let take_profit = finite_or("take-profit price", self.take_profit, entry)?;
        let stop_loss = finite_or("stop-loss price", self.stop_loss, entry)?;

        Ok(MarginPosition {
            entry,
            take_profit,
            stop_loss,
            margin_amount,
            leverage,
            side: self.side,
        })
    }
}

fn finite_or(field: &'static str, value: Option<f64>, fallback: f64) -> Result<f64, InputError> {
    match value {
        Some(v) if !v.is_finite() => Err(InputError::NonFinite { field, value: v }),
        Some(v) => Ok(v),
        None => Ok(fallback),
    }
}
