//! Handler for the `watch` command.

use std::time::Duration;

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::prices::{print_quiet, print_snapshot, snapshot_json};
use crate::adapter::inbound::cli::resolve::resolve_symbol;
use crate::application::RefreshLoop;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::{build_aggregator, build_refresh_loop};

/// Execute the watch command. Runs until Ctrl-C.
pub async fn execute(args: &WatchArgs, config: &Config) -> Result<()> {
    let symbol = resolve_symbol(&args.symbol, config)?;
    let refresh = match args.interval {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                field: "interval",
                reason: "must be greater than 0".to_string(),
            }
            .into())
        }
        Some(secs) => RefreshLoop::new(build_aggregator(config)?, Duration::from_secs(secs)),
        None => build_refresh_loop(config)?,
    };

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::note("Press Ctrl-C to stop");
    }

    let handle = refresh.spawn(symbol);
    let mut snapshots = handle.subscribe();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = snapshots.borrow_and_update().clone();
                if let Some(snapshot) = latest {
                    if output::is_json() {
                        output::json_output(snapshot_json("watch", &snapshot));
                    } else if output::is_quiet() {
                        print_quiet(&snapshot);
                    } else {
                        print_snapshot(&snapshot);
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    handle.stop().await;
    Ok(())
}
