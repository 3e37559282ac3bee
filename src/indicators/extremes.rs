//! Trailing high/low window (52-week extremes)

use crate::common::math::{self, pct_change};

/// Trading days in a year.
pub const DEFAULT_LOOKBACK: usize = 252;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    pub high: f64,
    pub low: f64,
    pub from_high_pct: f64,
    pub from_low_pct: f64,
}

/// High and low over the trailing `lookback` closes (all closes when fewer),
/// with the last close's distance from each.
pub fn calculate_extremes(closes: &[f64], lookback: usize) -> Option<Extremes> {
    let last = *closes.last()?;
    let start = closes.len().saturating_sub(lookback.max(1));
    let window = &closes[start..];
    let high = math::max(window)?;
    let low = math::min(window)?;

    Some(Extremes {
        high,
        low,
        from_high_pct: pct_change(last, high),
        from_low_pct: pct_change(last, low),
    })
}
