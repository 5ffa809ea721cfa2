//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`. Commands that talk to exchanges
//! take an optional symbol; calculator commands are fully offline.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::PositionSide;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "spreadcalc.toml";

/// Live crypto spot prices with arbitrage and margin P/L calculators
#[derive(Parser, Debug)]
#[command(name = "spreadcalc")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when absent)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch spot prices from every exchange once
    Prices(SymbolArg),

    /// Compare buying and selling across every exchange pair
    Sweep(SweepArgs),

    /// Fee-adjusted P/L for one manually entered buy/sell pair
    Arbitrage(ArbitrageArgs),

    /// Leveraged position P/L at take-profit and stop-loss
    Margin(MarginArgs),

    /// Refresh prices on an interval until interrupted
    Watch(WatchArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `spreadcalc config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Arguments for `spreadcalc config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Optional asset symbol; falls back to the configured default.
#[derive(Args, Debug)]
pub struct SymbolArg {
    /// Asset symbol, e.g. BTC or ETH
    pub symbol: Option<String>,
}

/// Fee flags shared by the sweep and manual arbitrage commands.
///
/// Unset flags fall back to the `[fees]` section of the configuration.
#[derive(Args, Debug, Default)]
pub struct FeeArgs {
    /// Buy-side fee in percent of notional
    #[arg(long, allow_hyphen_values = true)]
    pub buy_fee: Option<f64>,

    /// Sell-side fee in percent of notional
    #[arg(long, allow_hyphen_values = true)]
    pub sell_fee: Option<f64>,

    /// Flat transfer fee in dollars
    #[arg(long, allow_hyphen_values = true)]
    pub transfer_fee: Option<f64>,
}

/// Arguments for `spreadcalc sweep`.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub symbol: SymbolArg,

    /// Quantity of the base asset
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub quantity: f64,

    #[command(flatten)]
    pub fees: FeeArgs,

    /// Sort by net profit, best first
    #[arg(long)]
    pub ranked: bool,
}

/// Arguments for `spreadcalc arbitrage`.
#[derive(Args, Debug)]
pub struct ArbitrageArgs {
    /// Buy price
    #[arg(long, allow_hyphen_values = true)]
    pub buy: Option<f64>,

    /// Sell price
    #[arg(long, allow_hyphen_values = true)]
    pub sell: Option<f64>,

    /// Quantity of the base asset
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub quantity: f64,

    #[command(flatten)]
    pub fees: FeeArgs,
}

/// Arguments for `spreadcalc margin`.
#[derive(Args, Debug)]
pub struct MarginArgs {
    /// Entry price
    #[arg(long, allow_hyphen_values = true)]
    pub entry: Option<f64>,

    /// Take-profit price
    #[arg(long, allow_hyphen_values = true)]
    pub take_profit: Option<f64>,

    /// Stop-loss price
    #[arg(long, allow_hyphen_values = true)]
    pub stop_loss: Option<f64>,

    /// Margin posted, in dollars
    #[arg(long, allow_hyphen_values = true)]
    pub margin: Option<f64>,

    /// Leverage multiplier
    #[arg(long, allow_hyphen_values = true)]
    pub leverage: Option<f64>,

    /// Position side [long, short]
    #[arg(long, default_value = "long")]
    pub side: PositionSide,
}

/// Arguments for `spreadcalc watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub symbol: SymbolArg,

    /// Refresh interval in seconds (overrides configuration)
    #[arg(long)]
    pub interval: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_margin_short() {
        let cli = Cli::parse_from([
            "spreadcalc",
            "margin",
            "--entry",
            "100",
            "--margin",
            "1000",
            "--leverage",
            "10",
            "--side",
            "short",
        ]);

        match cli.command {
            Commands::Margin(args) => {
                assert_eq!(args.entry, Some(100.0));
                assert_eq!(args.side, PositionSide::Short);
                assert_eq!(args.take_profit, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn config_init_defaults_path() {
        let cli = Cli::parse_from(["spreadcalc", "config", "init"]);
        match cli.command {
            Commands::Config(ConfigCommand::Init(args)) => {
                assert_eq!(args.path, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert!(!args.force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_sweep_with_negative_fee() {
        let cli = Cli::parse_from([
            "spreadcalc",
            "sweep",
            "eth",
            "--quantity",
            "2",
            "--buy-fee=-0.01",
            "--ranked",
        ]);

        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.symbol.symbol.as_deref(), Some("eth"));
                assert_eq!(args.quantity, 2.0);
                assert_eq!(args.fees.buy_fee, Some(-0.01));
                assert!(args.ranked);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
