//! Feature engine: per-symbol metric records from bar series.

use tracing::debug;

use crate::common::math::pct_change;
use crate::config::DigestPolicy;
use crate::indicators::{calculate_extremes, calculate_rsi, five_day_change, one_day_change};
use crate::models::bars::BarSeries;
use crate::models::metrics::{MetricRecord, QuoteLine};
use crate::models::watchlist::Watchlist;
use crate::signals::detection::classify;

pub const MIN_BARS: usize = 60;

pub struct FeatureEngine<'a> {
    policy: &'a DigestPolicy,
}

impl<'a> FeatureEngine<'a> {
    pub fn new(policy: &'a DigestPolicy) -> Self {
        Self { policy }
    }

    /// Metric record for one symbol, or `None` when its history is shorter
    /// than the policy's minimum.
    pub fn compute(&self, symbol: &str, name: &str, closes: &[f64]) -> Option<MetricRecord> {
        if closes.is_empty() || closes.len() < self.policy.min_bars {
            debug!(
                symbol = %symbol,
                count = closes.len(),
                min = self.policy.min_bars,
                "FeatureEngine: skipping {} ({} < {} bars)",
                symbol,
                closes.len(),
                self.policy.min_bars
            );
            return None;
        }

        let last_price = *closes.last()?;
        let extremes = calculate_extremes(closes, self.policy.lookback)?;

        let mut record = MetricRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            last_price,
            change_1d_pct: one_day_change(closes)?,
            change_5d_pct: five_day_change(closes)?,
            from_high_pct: extremes.from_high_pct,
            from_low_pct: extremes.from_low_pct,
            rsi14: calculate_rsi(closes, self.policy.rsi_period),
            signals: Vec::new(),
        };
        record.signals = classify(&record, self.policy);
        Some(record)
    }

    /// Records for every series in input order, naming each from the
    /// watchlist (falling back to the symbol).
    pub fn compute_all(&self, watchlist: &Watchlist, series: &[BarSeries]) -> Vec<MetricRecord> {
        series
            .iter()
            .filter_map(|s| {
                let name = watchlist.name_of(&s.symbol).unwrap_or(&s.symbol);
                self.compute(&s.symbol, name, &s.closes())
            })
            .collect()
    }
}

/// Compact summary line: last close against the previous one.
/// Empty series produce nothing.
pub fn quote_line(series: &BarSeries) -> Option<QuoteLine> {
    let last = series.last()?;
    let prev_close = series
        .bars
        .len()
        .checked_sub(2)
        .map(|i| series.bars[i].close)
        .unwrap_or(last.close);

    Some(QuoteLine {
        symbol: series.symbol.clone(),
        last_close: last.close,
        change_pct: pct_change(last.close, prev_close),
        volume: last.volume.unwrap_or(0),
    })
}
