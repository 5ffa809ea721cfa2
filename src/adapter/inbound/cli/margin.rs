//! Handler for the `margin` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::MarginArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::compute_margin_pnl;
use crate::domain::input::MarginInput;
use crate::error::Result;

/// Execute the margin command.
pub fn execute(args: &MarginArgs) -> Result<()> {
    let position = MarginInput {
        entry: args.entry,
        take_profit: args.take_profit,
        stop_loss: args.stop_loss,
        margin_amount: args.margin,
        leverage: args.leverage,
        side: args.side,
    }
    .validate()?;
    let outcome = compute_margin_pnl(&position);

    if output::is_json() {
        output::json_output(json!({
            "command": "margin",
            "position": position,
            "outcome": outcome,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!(
            "{} {}",
            output::usd(outcome.profit),
            output::usd(outcome.loss)
        );
        return Ok(());
    }

    output::section("Margin position");
    output::field("Side", position.side);
    output::field("Entry", output::usd(position.entry));
    output::field("Take profit", output::usd(position.take_profit));
    output::field("Stop loss", output::usd(position.stop_loss));
    output::field("Leverage", format!("{}x", position.leverage));
    output::field("Position size", output::usd(outcome.position_size));

    output::section("Outcome");
    output::field("At take profit", output::pnl(outcome.profit));
    output::field("At stop loss", output::pnl(outcome.loss));
    Ok(())
}
