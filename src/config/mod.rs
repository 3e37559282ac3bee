//! Runtime configuration loaded once from the environment

use std::env;
use std::str::FromStr;
use std::time::Duration;

use cron::Schedule;
use url::Url;

use crate::error::ConfigError;
use crate::indicators::{DEFAULT_LOOKBACK, DEFAULT_RSI_PERIOD};
use crate::models::watchlist::{Watchlist, WatchlistEntry};
use crate::signals::engine::MIN_BARS;

pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";
pub const DEFAULT_MARKET_DATA_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_SCHEDULE: &str = "0 30 21 * * Mon-Fri";

/// Deployment environment (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

/// How the digest message is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestStyle {
    /// Movers, RSI and 52-week signals.
    #[default]
    Full,
    /// One line per ticker with close, change and volume.
    Compact,
}

impl FromStr for DigestStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown digest style '{}'", other)),
        }
    }
}

/// Thresholds and windows of the feature engine and reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestPolicy {
    /// Symbols with fewer closes are skipped.
    pub min_bars: usize,
    pub rsi_period: usize,
    /// Trailing window for the 52-week extremes.
    pub lookback: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Within this many percent below the high counts as near the high.
    pub near_high_pct: f64,
    /// Within this many percent above the low counts as near the low.
    pub near_low_pct: f64,
    pub movers: usize,
    pub max_signals: usize,
}

impl Default for DigestPolicy {
    fn default() -> Self {
        Self {
            min_bars: MIN_BARS,
            rsi_period: DEFAULT_RSI_PERIOD,
            lookback: DEFAULT_LOOKBACK,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            near_high_pct: 2.0,
            near_low_pct: 2.0,
            movers: 5,
            max_signals: 10,
        }
    }
}

/// Slack delivery settings.
#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub bot_token: String,
    pub channel_id: String,
    pub api_base: Url,
    pub timeout: Duration,
}

/// Market-data provider settings.
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub history_months: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub slack: SlackConfig,
    pub market_data: MarketDataConfig,
    pub watchlist: Watchlist,
    pub style: DigestStyle,
    pub policy: DigestPolicy,
    /// Cron expression for the worker, parsed on demand by [`Config::schedule`].
    pub schedule_expr: String,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get("SLACK_BOT_TOKEN").ok_or(ConfigError::Missing("SLACK_BOT_TOKEN"))?;
        let channel_id =
            get("SLACK_CHANNEL_ID").ok_or(ConfigError::Missing("SLACK_CHANNEL_ID"))?;

        let slack = SlackConfig {
            bot_token,
            channel_id,
            api_base: parse_url(
                "SLACK_API_BASE",
                get("SLACK_API_BASE").as_deref().unwrap_or(DEFAULT_SLACK_API_BASE),
            )?,
            timeout: Duration::from_secs(parse_or(
                "NOTIFY_TIMEOUT_SECONDS",
                get("NOTIFY_TIMEOUT_SECONDS"),
                20,
            )?),
        };

        let market_data = MarketDataConfig {
            base_url: parse_url(
                "MARKET_DATA_BASE_URL",
                get("MARKET_DATA_BASE_URL")
                    .as_deref()
                    .unwrap_or(DEFAULT_MARKET_DATA_BASE_URL),
            )?,
            timeout: Duration::from_secs(parse_or(
                "FETCH_TIMEOUT_SECONDS",
                get("FETCH_TIMEOUT_SECONDS"),
                10,
            )?),
            history_months: parse_or("HISTORY_MONTHS", get("HISTORY_MONTHS"), 13)?,
        };

        let watchlist = match get("DIGEST_WATCHLIST") {
            Some(raw) => parse_watchlist(&raw)?,
            None => Watchlist::canada_focus(),
        };

        let style = match get("DIGEST_STYLE") {
            Some(raw) => raw
                .parse()
                .map_err(|e: String| ConfigError::invalid("DIGEST_STYLE", e))?,
            None => DigestStyle::default(),
        };

        let defaults = DigestPolicy::default();
        let policy = DigestPolicy {
            min_bars: parse_or("DIGEST_MIN_BARS", get("DIGEST_MIN_BARS"), defaults.min_bars)?,
            rsi_period: defaults.rsi_period,
            lookback: defaults.lookback,
            rsi_oversold: parse_or(
                "DIGEST_RSI_OVERSOLD",
                get("DIGEST_RSI_OVERSOLD"),
                defaults.rsi_oversold,
            )?,
            rsi_overbought: parse_or(
                "DIGEST_RSI_OVERBOUGHT",
                get("DIGEST_RSI_OVERBOUGHT"),
                defaults.rsi_overbought,
            )?,
            near_high_pct: parse_or(
                "DIGEST_NEAR_HIGH_PCT",
                get("DIGEST_NEAR_HIGH_PCT"),
                defaults.near_high_pct,
            )?,
            near_low_pct: parse_or(
                "DIGEST_NEAR_LOW_PCT",
                get("DIGEST_NEAR_LOW_PCT"),
                defaults.near_low_pct,
            )?,
            movers: parse_or("DIGEST_MOVERS", get("DIGEST_MOVERS"), defaults.movers)?,
            max_signals: parse_or(
                "DIGEST_MAX_SIGNALS",
                get("DIGEST_MAX_SIGNALS"),
                defaults.max_signals,
            )?,
        };

        let schedule_expr =
            get("DIGEST_SCHEDULE").unwrap_or_else(|| DEFAULT_SCHEDULE.to_string());

        Ok(Self {
            slack,
            market_data,
            watchlist,
            style,
            policy,
            schedule_expr,
        })
    }

    /// Parse the worker's cron schedule. The one-shot run never calls this.
    pub fn schedule(&self) -> Result<Schedule, ConfigError> {
        Schedule::from_str(&self.schedule_expr).map_err(|e| {
            ConfigError::invalid(
                "DIGEST_SCHEDULE",
                format!("invalid cron expression '{}': {}", self.schedule_expr, e),
            )
        })
    }
}

/// Parse `SYM=Name,SYM2=Name2`. A bare `SYM` uses the symbol as its name.
pub fn parse_watchlist(raw: &str) -> Result<Watchlist, ConfigError> {
    let mut entries = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (symbol, name) = match item.split_once('=') {
            Some((symbol, name)) => (symbol.trim(), name.trim()),
            None => (item, item),
        };
        if symbol.is_empty() {
            return Err(ConfigError::invalid(
                "DIGEST_WATCHLIST",
                format!("entry '{}' has no symbol", item),
            ));
        }
        let name = if name.is_empty() { symbol } else { name };
        entries.push(WatchlistEntry::new(symbol.to_uppercase(), name));
    }
    if entries.is_empty() {
        return Err(ConfigError::invalid("DIGEST_WATCHLIST", "no symbols listed"));
    }
    Ok(Watchlist::new(entries))
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, format!("'{}': {}", value, e))),
        None => Ok(default),
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::invalid(key, format!("'{}': {}", raw, e)))
}
