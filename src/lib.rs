//! Scheduled market-data digest.
//!
//! Pulls daily history for a watchlist, derives per-symbol statistics,
//! detects threshold signals and posts a summary to a Slack channel.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;

pub use config::Config;
pub use error::{ConfigError, DigestError, MarketDataError, NotifyError};
