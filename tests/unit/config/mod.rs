//! Unit tests for configuration loading

use std::collections::HashMap;
use std::time::Duration;

use market_digest::config::{parse_watchlist, Config, DigestPolicy, DigestStyle};
use market_digest::error::ConfigError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const CREDS: [(&str, &str); 2] = [("SLACK_BOT_TOKEN", "xoxb-test"), ("SLACK_CHANNEL_ID", "C123")];

#[test]
fn test_defaults() {
    let config = Config::from_lookup(lookup(&CREDS)).unwrap();
    assert_eq!(config.slack.bot_token, "xoxb-test");
    assert_eq!(config.slack.channel_id, "C123");
    assert_eq!(config.slack.timeout, Duration::from_secs(20));
    assert_eq!(config.slack.api_base.as_str(), "https://slack.com/api");
    assert_eq!(config.market_data.history_months, 13);
    assert_eq!(config.style, DigestStyle::Full);
    assert_eq!(config.policy, DigestPolicy::default());
    assert_eq!(config.watchlist.len(), 33);
    assert_eq!(config.watchlist.name_of("RY.TO"), Some("Royal Bank"));
}

#[test]
fn test_missing_token_is_fatal() {
    let err = Config::from_lookup(lookup(&[("SLACK_CHANNEL_ID", "C123")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SLACK_BOT_TOKEN")));
}

#[test]
fn test_blank_channel_is_missing() {
    let err = Config::from_lookup(lookup(&[
        ("SLACK_BOT_TOKEN", "xoxb-test"),
        ("SLACK_CHANNEL_ID", "   "),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SLACK_CHANNEL_ID")));
}

#[test]
fn test_overrides() {
    let mut pairs = CREDS.to_vec();
    pairs.extend([
        ("NOTIFY_TIMEOUT_SECONDS", "5"),
        ("DIGEST_STYLE", "Compact"),
        ("DIGEST_MIN_BARS", "2"),
        ("DIGEST_NEAR_HIGH_PCT", "1.5"),
        ("DIGEST_MAX_SIGNALS", "3"),
        ("DIGEST_WATCHLIST", "spy=S&P 500, TD.TO=TD Bank"),
        ("DIGEST_SCHEDULE", "0 0 22 * * *"),
    ]);
    let config = Config::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.schedule_expr, "0 0 22 * * *");
    assert_eq!(config.slack.timeout, Duration::from_secs(5));
    assert_eq!(config.style, DigestStyle::Compact);
    assert_eq!(config.policy.min_bars, 2);
    assert_eq!(config.policy.near_high_pct, 1.5);
    assert_eq!(config.policy.max_signals, 3);
    assert_eq!(config.watchlist.symbols(), vec!["SPY", "TD.TO"]);
    assert_eq!(config.watchlist.name_of("SPY"), Some("S&P 500"));
}

#[test]
fn test_malformed_number() {
    let mut pairs = CREDS.to_vec();
    pairs.push(("DIGEST_MIN_BARS", "sixty"));
    let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "DIGEST_MIN_BARS", .. }));
}

#[test]
fn test_unknown_style() {
    let mut pairs = CREDS.to_vec();
    pairs.push(("DIGEST_STYLE", "verbose"));
    assert!(Config::from_lookup(lookup(&pairs)).is_err());
}

#[test]
fn test_invalid_schedule() {
    let mut pairs = CREDS.to_vec();
    pairs.push(("DIGEST_SCHEDULE", "whenever"));
    // Only the worker needs the schedule, so loading still succeeds.
    let config = Config::from_lookup(lookup(&pairs)).unwrap();
    let err = config.schedule().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "DIGEST_SCHEDULE", .. }));
}

#[test]
fn test_default_schedule_parses() {
    let config = Config::from_lookup(lookup(&CREDS)).unwrap();
    assert_eq!(config.schedule_expr, "0 30 21 * * Mon-Fri");
    assert!(config.schedule().is_ok());
}

#[test]
fn test_parse_watchlist() {
    let watchlist = parse_watchlist("AAPL=Apple, msft ,AAPL=Apple Inc").unwrap();
    assert_eq!(watchlist.symbols(), vec!["AAPL", "MSFT"]);
    assert_eq!(watchlist.name_of("AAPL"), Some("Apple Inc"));
    assert_eq!(watchlist.name_of("MSFT"), Some("msft"));
}

#[test]
fn test_parse_watchlist_rejects_empty() {
    assert!(parse_watchlist(" , ").is_err());
    assert!(parse_watchlist("=Nameless").is_err());
}
