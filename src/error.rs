use std::time::Duration;

use thiserror::Error;

use crate::domain::error::InputError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Reasons a single exchange could not produce a quote.
///
/// These never leave the aggregator: every variant collapses into an
/// absent quote in the snapshot.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no price in response")]
    NoPrice,

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid symbol '{symbol}': {reason}")]
    InvalidSymbol { symbol: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
