//! Unit tests for signal detection

use market_digest::config::DigestPolicy;
use market_digest::models::{MetricRecord, SignalKind};
use market_digest::signals::{classify, detect_signals};

fn record(symbol: &str, rsi: Option<f64>, from_high: f64, from_low: f64) -> MetricRecord {
    MetricRecord {
        symbol: symbol.to_string(),
        name: format!("{} Corp", symbol),
        last_price: 10.0,
        change_1d_pct: 0.0,
        change_5d_pct: 0.0,
        from_high_pct: from_high,
        from_low_pct: from_low,
        rsi14: rsi,
        signals: Vec::new(),
    }
}

#[test]
fn test_classify_thresholds() {
    let policy = DigestPolicy::default();
    assert_eq!(
        classify(&record("A", Some(25.0), -10.0, 10.0), &policy),
        vec![SignalKind::Oversold]
    );
    assert_eq!(
        classify(&record("B", Some(75.0), -10.0, 10.0), &policy),
        vec![SignalKind::Overbought]
    );
    assert_eq!(
        classify(&record("C", Some(50.0), -1.5, 10.0), &policy),
        vec![SignalKind::NearHigh]
    );
    assert_eq!(
        classify(&record("D", Some(50.0), -10.0, 1.0), &policy),
        vec![SignalKind::NearLow]
    );
}

#[test]
fn test_thresholds_are_strict() {
    let policy = DigestPolicy::default();
    assert!(classify(&record("A", Some(30.0), -2.0, 2.0), &policy).is_empty());
    assert!(classify(&record("B", Some(70.0), -2.0, 2.0), &policy).is_empty());
}

#[test]
fn test_multiple_signals_on_one_record() {
    let policy = DigestPolicy::default();
    // Flat range: at the high and at the low simultaneously.
    let kinds = classify(&record("A", Some(80.0), 0.0, 0.5), &policy);
    assert_eq!(
        kinds,
        vec![SignalKind::Overbought, SignalKind::NearHigh, SignalKind::NearLow]
    );
}

#[test]
fn test_missing_rsi_never_triggers_rsi_signals() {
    let policy = DigestPolicy::default();
    assert!(classify(&record("A", None, -10.0, 10.0), &policy).is_empty());
}

#[test]
fn test_custom_bands() {
    let policy = DigestPolicy {
        near_high_pct: 5.0,
        near_low_pct: 0.5,
        ..DigestPolicy::default()
    };
    assert_eq!(
        classify(&record("A", Some(50.0), -4.0, 1.0), &policy),
        vec![SignalKind::NearHigh]
    );
}

#[test]
fn test_detection_order_by_kind_then_rank() {
    let policy = DigestPolicy::default();
    let ranked = vec![
        record("NH", Some(50.0), -1.0, 20.0),
        record("OS1", Some(20.0), -20.0, 20.0),
        record("OB", Some(90.0), -20.0, 20.0),
        record("OS2", Some(10.0), -20.0, 20.0),
        record("NL", Some(50.0), -20.0, 1.0),
    ];

    let signals = detect_signals(&ranked, &policy);
    let flat: Vec<(SignalKind, &str)> =
        signals.iter().map(|s| (s.kind, s.symbol.as_str())).collect();
    assert_eq!(
        flat,
        vec![
            (SignalKind::Oversold, "OS1"),
            (SignalKind::Oversold, "OS2"),
            (SignalKind::Overbought, "OB"),
            (SignalKind::NearHigh, "NH"),
            (SignalKind::NearLow, "NL"),
        ]
    );
    assert_eq!(signals[0].name, "OS1 Corp");
}

#[test]
fn test_signal_list_capped() {
    let policy = DigestPolicy::default();
    let ranked: Vec<MetricRecord> = (0..30)
        .map(|i| record(&format!("S{}", i), Some(10.0), 0.0, 0.0))
        .collect();
    let signals = detect_signals(&ranked, &policy);
    assert_eq!(signals.len(), policy.max_signals);
    // Truncation keeps detection order: the first kind fills the list.
    assert!(signals.iter().all(|s| s.kind == SignalKind::Oversold));
}
