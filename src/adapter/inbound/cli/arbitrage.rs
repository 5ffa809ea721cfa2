//! Handler for the `arbitrage` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::ArbitrageArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::resolve::resolve_fees;
use crate::domain::compute_arbitrage;
use crate::domain::input::manual_prices;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute the arbitrage command.
pub fn execute(args: &ArbitrageArgs, config: &Config) -> Result<()> {
    let (buy, sell) = manual_prices(args.buy, args.sell)?;
    let fees = resolve_fees(&args.fees, config);
    let result = compute_arbitrage(buy, sell, args.quantity, &fees);

    if output::is_json() {
        output::json_output(json!({
            "command": "arbitrage",
            "buy_price": buy,
            "sell_price": sell,
            "quantity": args.quantity,
            "fees": fees,
            "result": result,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!("{}", output::usd(result.net_profit));
        return Ok(());
    }

    output::section("Arbitrage");
    output::field("Buy price", output::usd(buy));
    output::field("Sell price", output::usd(sell));
    output::field("Quantity", args.quantity);
    output::field("Gross profit", output::pnl(result.gross_profit));
    output::field("Total fees", output::usd(result.total_fees));
    output::field("Net profit", output::pnl(result.net_profit));
    Ok(())
}
