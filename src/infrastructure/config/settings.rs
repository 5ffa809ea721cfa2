//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Every section is optional; a
//! missing section falls back to defaults that talk to the production
//! exchange APIs.
//!
//! # Example
//!
//! ```no_run
//! use spreadcalc::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("spreadcalc.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::adapter::outbound::exchange::{
    Binance, Bitstamp, Coinbase, Kraken, Kucoin, TickerEndpoint,
};
use crate::application::aggregator::DEFAULT_QUOTE_TIMEOUT;
use crate::application::refresh::DEFAULT_REFRESH_INTERVAL;
use crate::domain::{ExchangeId, FeeSpec, Symbol};
use crate::error::{ConfigError, Result};

/// HTTP client settings shared by every exchange adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-exchange request bound in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_QUOTE_TIMEOUT.as_secs() * 1_000
}

fn default_user_agent() -> String {
    concat!("spreadcalc/", env!("CARGO_PKG_VERSION")).to_string()
}

impl HttpConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Live refresh cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL.as_secs()
}

impl RefreshConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// API roots per exchange. Override to point at a proxy or a stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeUrls {
    #[serde(default = "default_binance_url")]
    pub binance: String,
    #[serde(default = "default_coinbase_url")]
    pub coinbase: String,
    #[serde(default = "default_kraken_url")]
    pub kraken: String,
    #[serde(default = "default_bitstamp_url")]
    pub bitstamp: String,
    #[serde(default = "default_kucoin_url")]
    pub kucoin: String,
}

fn default_binance_url() -> String {
    Binance::DEFAULT_BASE_URL.to_string()
}

fn default_coinbase_url() -> String {
    Coinbase::DEFAULT_BASE_URL.to_string()
}

fn default_kraken_url() -> String {
    Kraken::DEFAULT_BASE_URL.to_string()
}

fn default_bitstamp_url() -> String {
    Bitstamp::DEFAULT_BASE_URL.to_string()
}

fn default_kucoin_url() -> String {
    Kucoin::DEFAULT_BASE_URL.to_string()
}

impl ExchangeUrls {
    /// Configured root for one exchange.
    #[must_use]
    pub fn get(&self, exchange: ExchangeId) -> &str {
        match exchange {
            ExchangeId::Binance => &self.binance,
            ExchangeId::Coinbase => &self.coinbase,
            ExchangeId::Kraken => &self.kraken,
            ExchangeId::Bitstamp => &self.bitstamp,
            ExchangeId::Kucoin => &self.kucoin,
        }
    }

    /// Point every exchange at the same root (useful against a local stub).
    #[must_use]
    pub fn all(base_url: &str) -> Self {
        Self {
            binance: base_url.to_string(),
            coinbase: base_url.to_string(),
            kraken: base_url.to_string(),
            bitstamp: base_url.to_string(),
            kucoin: base_url.to_string(),
        }
    }
}

impl Default for ExchangeUrls {
    fn default() -> Self {
        Self {
            binance: default_binance_url(),
            coinbase: default_coinbase_url(),
            kraken: default_kraken_url(),
            bitstamp: default_bitstamp_url(),
            kucoin: default_kucoin_url(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Symbol used when a command does not name one.
    #[serde(default)]
    pub symbol: Symbol,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Default fee schedule for sweeps and manual calculations.
    #[serde(default)]
    pub fees: FeeSpec,

    #[serde(default)]
    pub exchanges: ExchangeUrls,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let fees = [
            ("buy_fee_pct", self.fees.buy_fee_pct),
            ("sell_fee_pct", self.fees.sell_fee_pct),
            ("transfer_fee_flat", self.fees.transfer_fee_flat),
        ];
        for (field, value) in fees {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be a finite number".to_string(),
                }
                .into());
            }
        }

        for exchange in ExchangeId::ALL {
            let url = self.exchanges.get(exchange);
            if url.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: exchange.name(),
                }
                .into());
            }
            if let Err(e) = url::Url::parse(url) {
                return Err(ConfigError::InvalidValue {
                    field: exchange.name(),
                    reason: e.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
