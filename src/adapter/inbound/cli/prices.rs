//! Handler for the `prices` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::SymbolArg;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::resolve::resolve_symbol;
use crate::domain::PriceSnapshot;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::build_aggregator;

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Exchange")]
    exchange: &'static str,
    #[tabled(rename = "Price (USD)")]
    price: String,
}

/// Execute the prices command.
pub async fn execute(args: &SymbolArg, config: &Config) -> Result<()> {
    let symbol = resolve_symbol(args, config)?;
    let aggregator = build_aggregator(config)?;

    let spinner = output::spinner(&format!("Fetching {symbol} prices"));
    let snapshot = aggregator.fetch_snapshot(&symbol).await;
    finish_spinner(&spinner, &snapshot);

    if output::is_json() {
        output::json_output(snapshot_json("prices", &snapshot));
        return Ok(());
    }

    if output::is_quiet() {
        print_quiet(&snapshot);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    print_snapshot(&snapshot);
    Ok(())
}

pub(crate) fn finish_spinner(spinner: &indicatif::ProgressBar, snapshot: &PriceSnapshot) {
    let known = snapshot.known_count();
    let total = snapshot.quotes().count();
    let message = format!("{known}/{total} exchanges reported");
    if known == total {
        output::spinner_success(spinner, &message);
    } else {
        output::spinner_warn(spinner, &message);
    }
}

/// Render a snapshot as a table, unavailable quotes shown as `N/A`.
pub(crate) fn print_snapshot(snapshot: &PriceSnapshot) {
    output::section(&format!("{} spot prices", snapshot.symbol()));

    let rows: Vec<QuoteRow> = snapshot
        .quotes()
        .map(|quote| QuoteRow {
            exchange: quote.exchange.name(),
            price: price_text(quote.price),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    output::note(&format!(
        "captured {}",
        snapshot.captured_at().format("%Y-%m-%d %H:%M:%S UTC")
    ));
}

/// Plain `exchange price` lines for quiet mode.
pub(crate) fn print_quiet(snapshot: &PriceSnapshot) {
    for line in quiet_lines(snapshot) {
        println!("{line}");
    }
}

fn quiet_lines(snapshot: &PriceSnapshot) -> Vec<String> {
    snapshot
        .quotes()
        .map(|quote| format!("{} {}", quote.exchange.name(), price_text(quote.price)))
        .collect()
}

fn price_text(price: Option<f64>) -> String {
    price.map_or_else(|| "N/A".to_string(), output::usd)
}

pub(crate) fn snapshot_json(command: &str, snapshot: &PriceSnapshot) -> serde_json::Value {
    let prices: serde_json::Map<String, serde_json::Value> = snapshot
        .quotes()
        .map(|quote| (quote.exchange.name().to_string(), json!(quote.price)))
        .collect();

    json!({
        "command": command,
        "symbol": snapshot.symbol().as_str(),
        "captured_at": snapshot.captured_at().to_rfc3339(),
        "prices": prices,
    })
}
