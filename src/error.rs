//! Error taxonomy for a digest run

use thiserror::Error;

/// Invalid or missing configuration. Always fatal before any work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Failure talking to the market-data provider.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("transport error fetching {symbol}: {source}")]
    Transport {
        symbol: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("provider returned status {status} for {symbol}")]
    Status { symbol: String, status: u16 },
    #[error("malformed provider payload for {symbol}: {reason}")]
    Payload { symbol: String, reason: String },
    #[error("market data client error: {0}")]
    Client(String),
}

/// Failure delivering a message to the chat channel.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("slack transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("slack API error (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("notifier client error: {0}")]
    Client(String),
}

/// Top-level error of a digest run.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
    #[error(transparent)]
    Delivery(#[from] NotifyError),
}
