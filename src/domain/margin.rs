//! Leveraged position P/L at take-profit and stop-loss levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a leveraged position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    #[default]
    Long,
    Short,
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("long"),
            Self::Short => f.write_str("short"),
        }
    }
}

impl FromStr for PositionSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            other => Err(format!("unknown position side '{other}'")),
        }
    }
}

/// A leveraged position with its exit levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginPosition {
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub margin_amount: f64,
    pub leverage: f64,
    pub side: PositionSide,
}

impl MarginPosition {
    /// Effective exposure: margin times leverage.
    #[must_use]
    pub fn position_size(&self) -> f64 {
        self.margin_amount * self.leverage
    }
}

/// P/L of a position if either exit level is hit.
///
/// Values are full precision; callers round for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarginOutcome {
    pub position_size: f64,
    /// P/L if the take-profit level is hit.
    pub profit: f64,
    /// P/L if the stop-loss level is hit (negative when it loses).
    pub loss: f64,
}

/// Compute P/L at both exit levels.
///
/// Division by `entry` is unguarded; run the inputs through
/// [`crate::domain::input`] first to keep a zero entry out.
#[must_use]
pub fn compute_margin_pnl(position: &MarginPosition) -> MarginOutcome {
    let size = position.position_size();
    let entry = position.entry;

    let (profit, loss) = match position.side {
        PositionSide::Long => (
            (position.take_profit - entry) / entry * size,
            (position.stop_loss - entry) / entry * size,
        ),
        PositionSide::Short => (
            (entry - position.take_profit) / entry * size,
            (entry - position.stop_loss) / entry * size,
        ),
    };

    MarginOutcome {
        position_size: size,
        profit,
        loss,
    }
}
