//! Threshold signal detection

use crate::config::DigestPolicy;
use crate::models::metrics::MetricRecord;
use crate::models::signal::{Signal, SignalKind};

/// Whether `kind` holds for the record under `policy`.
pub fn matches(record: &MetricRecord, kind: SignalKind, policy: &DigestPolicy) -> bool {
    match kind {
        SignalKind::Oversold => record.rsi14.is_some_and(|rsi| rsi < policy.rsi_oversold),
        SignalKind::Overbought => record.rsi14.is_some_and(|rsi| rsi > policy.rsi_overbought),
        SignalKind::NearHigh => record.from_high_pct > -policy.near_high_pct,
        SignalKind::NearLow => record.from_low_pct < policy.near_low_pct,
    }
}

/// Every kind that holds for the record, in detection order.
pub fn classify(record: &MetricRecord, policy: &DigestPolicy) -> Vec<SignalKind> {
    SignalKind::ALL
        .into_iter()
        .filter(|kind| matches(record, *kind, policy))
        .collect()
}

/// Flat signal list over ranked records: all oversold, then overbought,
/// near-high and near-low, each in ranked order, capped at `max_signals`.
pub fn detect_signals(ranked: &[MetricRecord], policy: &DigestPolicy) -> Vec<Signal> {
    SignalKind::ALL
        .into_iter()
        .flat_map(|kind| {
            ranked
                .iter()
                .filter(move |r| matches(r, kind, policy))
                .map(move |r| Signal {
                    kind,
                    symbol: r.symbol.clone(),
                    name: r.name.clone(),
                })
        })
        .take(policy.max_signals)
        .collect()
}
