use serde::{Deserialize, Serialize};

use super::signal::SignalKind;

/// Derived statistics for one symbol in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub symbol: String,
    pub name: String,
    pub last_price: f64,
    pub change_1d_pct: f64,
    pub change_5d_pct: f64,
    pub from_high_pct: f64,
    pub from_low_pct: f64,
    /// Absent when the history is shorter than the RSI window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi14: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<SignalKind>,
}

/// Single-line summary used by the compact digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub symbol: String,
    pub last_close: f64,
    pub change_pct: f64,
    pub volume: u64,
}
