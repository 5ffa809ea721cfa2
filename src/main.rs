use std::io::IsTerminal;
use std::path::Path;

use clap::Parser;
use tracing::debug;

use spreadcalc::adapter::inbound::cli::command::{
    Cli, ColorChoice, Commands, ConfigCommand, DEFAULT_CONFIG_PATH,
};
use spreadcalc::adapter::inbound::cli::{
    arbitrage, config as config_cmd, margin, output, prices, sweep, watch,
};
use spreadcalc::error::Result;
use spreadcalc::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    output::configure(output::OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
        color: use_color(&cli.color),
    });

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // `config init` must work before any config file exists.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        return config_cmd::execute_init(args);
    }

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);
    debug!(symbol = %config.symbol, "Configuration loaded");

    match &cli.command {
        Commands::Prices(args) => prices::execute(args, &config).await,
        Commands::Sweep(args) => sweep::execute(args, &config).await,
        Commands::Arbitrage(args) => arbitrage::execute(args, &config),
        Commands::Margin(args) => margin::execute(args),
        Commands::Watch(args) => watch::execute(args, &config).await,
        Commands::Config(ConfigCommand::Show) => config_cmd::execute_show(&config),
        Commands::Config(ConfigCommand::Validate) => {
            let path = cli
                .config
                .as_deref()
                .or_else(|| Some(Path::new(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()));
            config_cmd::execute_validate(path, &config)
        }
        Commands::Config(ConfigCommand::Init(args)) => config_cmd::execute_init(args),
    }
}

/// An explicit path must load; the default path is optional.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                Config::load(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn init_logging(config: &Config, verbose: u8) {
    let mut logging = config.logging.clone();
    logging.level = match verbose {
        0 => logging.level,
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    };
    if output::is_json() {
        logging.format = "json".into();
    }
    logging.init();
}

fn use_color(choice: &ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}
