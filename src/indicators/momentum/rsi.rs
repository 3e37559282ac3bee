//! RSI (Relative Strength Index) indicator

use crate::common::math;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI value for every close.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = mean gain / mean loss, simple rolling mean over `period` differences
///
/// The first difference is undefined, so the first `period` entries are
/// `None`. A zero mean loss is floored to [`math::EPSILON`], which pushes RSI
/// toward 100 instead of leaving it undefined.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if closes.is_empty() {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.push(None);
    losses.push(None);

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(Some(change.max(0.0)));
        losses.push(Some(-change.min(0.0)));
    }

    let avg_gains = math::rolling_mean(&gains, period);
    let avg_losses = math::rolling_mean(&losses, period);

    avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| {
            let (gain, loss) = (gain?, loss?);
            let loss = if loss == 0.0 { math::EPSILON } else { loss };
            let rs = gain / loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        })
        .collect()
}

/// Latest RSI value, or `None` when the history is shorter than `period + 1`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    rsi_series(closes, period).last().copied().flatten()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<f64> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}
