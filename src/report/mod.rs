//! Digest assembly and Slack mrkdwn formatting.

pub mod format;

pub use format::*;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::DigestPolicy;
use crate::models::metrics::MetricRecord;
use crate::models::signal::Signal;
use crate::signals::{bottom_movers, detect_signals, rank, top_movers};

/// Everything the full-style message renders.
#[derive(Debug, Clone, Serialize)]
pub struct DigestReport {
    pub date: NaiveDate,
    pub ranked: Vec<MetricRecord>,
    pub top: Vec<MetricRecord>,
    pub bottom: Vec<MetricRecord>,
    pub signals: Vec<Signal>,
}

impl DigestReport {
    pub fn build(records: Vec<MetricRecord>, policy: &DigestPolicy, date: NaiveDate) -> Self {
        let ranked = rank(records);
        let top = top_movers(&ranked, policy.movers);
        let bottom = bottom_movers(&ranked, policy.movers);
        let signals = detect_signals(&ranked, policy);
        Self {
            date,
            ranked,
            top,
            bottom,
            signals,
        }
    }
}
