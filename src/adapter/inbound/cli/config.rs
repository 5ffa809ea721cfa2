//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigInitArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::ExchangeId;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../spreadcalc.toml.example");

/// Execute `config init`.
pub fn execute_init(args: &ConfigInitArgs) -> Result<()> {
    let path = args.path.as_path();
    if path.exists() && !args.force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::note(&format!(
        "Run: spreadcalc config validate -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        print!("{}", render_toml(config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Symbol", &config.symbol);

    output::section("HTTP");
    output::field("Timeout", format!("{}ms", config.http.timeout_ms));
    output::field("User agent", &config.http.user_agent);

    output::section("Refresh");
    output::field("Interval", format!("{}s", config.refresh.interval_secs));

    output::section("Fees");
    output::field("Buy", format!("{}%", config.fees.buy_fee_pct));
    output::field("Sell", format!("{}%", config.fees.sell_fee_pct));
    output::field("Transfer", output::usd(config.fees.transfer_fee_flat));

    output::section("Exchanges");
    for exchange in ExchangeId::ALL {
        output::field(exchange.name(), config.exchanges.get(exchange));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file; this reports the outcome.
pub fn execute_validate(path: Option<&Path>, config: &Config) -> Result<()> {
    let source = path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": source,
            "valid": true,
            "symbol": config.symbol.as_str(),
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", &source);
    output::success("Config file is valid");
    Ok(())
}

fn render_toml(config: &Config) -> Result<String> {
    config.to_toml().map_err(|e| {
        ConfigError::InvalidValue {
            field: "config",
            reason: e.to_string(),
        }
        .into()
    })
}
