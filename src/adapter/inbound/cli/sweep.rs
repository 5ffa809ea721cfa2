//! Handler for the `sweep` command.
//!
//! Fetches one snapshot and prices every ordered exchange pair against the
//! effective fee schedule. Output is a table plus a bar chart of net profit
//! per `buy→sell` label.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::SweepArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::prices::{finish_spinner, print_snapshot};
use crate::adapter::inbound::cli::resolve::{resolve_fees, resolve_symbol};
use crate::domain::{
    best_opportunity, compute_all_opportunities, rank_by_net_profit, ArbitrageOpportunity,
};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_aggregator;

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "Buy")]
    buy: &'static str,
    #[tabled(rename = "Sell")]
    sell: &'static str,
    #[tabled(rename = "Net profit")]
    net: String,
}

/// Execute the sweep command.
pub async fn execute(args: &SweepArgs, config: &Config) -> Result<()> {
    let symbol = resolve_symbol(&args.symbol, config)?;
    let fees = resolve_fees(&args.fees, config);
    let aggregator = build_aggregator(config)?;

    let spinner = output::spinner(&format!("Fetching {symbol} prices"));
    let snapshot = aggregator.fetch_snapshot(&symbol).await;
    finish_spinner(&spinner, &snapshot);

    let mut opportunities = compute_all_opportunities(&snapshot, args.quantity, &fees);
    if args.ranked {
        rank_by_net_profit(&mut opportunities);
    }
    let best = best_opportunity(&opportunities);

    if output::is_json() {
        output::json_output(json!({
            "command": "sweep",
            "symbol": symbol.as_str(),
            "quantity": args.quantity,
            "fees": fees,
            "captured_at": snapshot.captured_at().to_rfc3339(),
            "opportunities": opportunities,
            "best": best,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        for line in quiet_lines(&opportunities) {
            println!("{line}");
        }
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    print_snapshot(&snapshot);

    output::section("Opportunities");
    output::field("Quantity", args.quantity);
    output::field("Buy fee", format!("{}%", fees.buy_fee_pct));
    output::field("Sell fee", format!("{}%", fees.sell_fee_pct));
    output::field("Transfer fee", output::usd(fees.transfer_fee_flat));

    if opportunities.is_empty() {
        output::warning("Fewer than two exchanges reported; nothing to compare");
        return Ok(());
    }

    output::lines(&Table::new(opportunities.iter().map(row)).to_string());

    output::section("Net profit by route");
    for line in chart(&opportunities) {
        output::lines(&line);
    }

    if let Some(best) = best {
        if best.net_profit > 0.0 {
            output::success(&format!(
                "Best route {} nets {}",
                best.label(),
                output::usd(best.net_profit)
            ));
        } else {
            output::note(&format!(
                "No profitable route; best is {} at {}",
                best.label(),
                output::usd(best.net_profit)
            ));
        }
    }

    Ok(())
}

fn row(opportunity: &ArbitrageOpportunity) -> OpportunityRow {
    OpportunityRow {
        buy: opportunity.from_exchange.name(),
        sell: opportunity.to_exchange.name(),
        net: output::usd(opportunity.net_profit),
    }
}

fn quiet_lines(opportunities: &[ArbitrageOpportunity]) -> Vec<String> {
    opportunities
        .iter()
        .map(|o| format!("{} {}", o.label(), output::usd(o.net_profit)))
        .collect()
}

/// One chart line per opportunity, labels padded to a common width.
fn chart(opportunities: &[ArbitrageOpportunity]) -> Vec<String> {
    let max_abs = opportunities
        .iter()
        .map(|o| o.net_profit.abs())
        .fold(0.0_f64, f64::max);
    let labels: Vec<String> = opportunities.iter().map(ArbitrageOpportunity::label).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    opportunities
        .iter()
        .zip(labels)
        .map(|(o, label)| {
            let pad = width - label.chars().count();
            format!(
                "{label}{} {:>12} {}",
                " ".repeat(pad),
                output::pnl(o.net_profit),
                output::bar(o.net_profit, max_abs, BAR_WIDTH)
            )
        })
        .collect()
}
