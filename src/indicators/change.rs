//! Close-to-close percent changes

use crate::common::math::pct_change;

/// Close `offset` observations before the last one.
///
/// Falls back to the first close when the history is too short, matching how
/// a short series is compared against its oldest point.
pub fn close_back(closes: &[f64], offset: usize) -> Option<f64> {
    let last_idx = closes.len().checked_sub(1)?;
    Some(closes[last_idx.saturating_sub(offset)])
}

/// Percent change of the last close versus the close `offset` bars earlier.
pub fn change_over(closes: &[f64], offset: usize) -> Option<f64> {
    let last = *closes.last()?;
    let base = close_back(closes, offset)?;
    Some(pct_change(last, base))
}

/// 1-day change: last versus previous close (0 with a single close).
pub fn one_day_change(closes: &[f64]) -> Option<f64> {
    change_over(closes, 1)
}

/// 5-day change: last versus the 6th-from-last close, or the first close.
pub fn five_day_change(closes: &[f64]) -> Option<f64> {
    change_over(closes, 5)
}
