//! Numeric primitives used by the indicators

/// Floor applied to a zero denominator in ratio calculations.
pub const EPSILON: f64 = 1e-9;

/// Percent change of `current` relative to `base`: `(current / base - 1) * 100`.
///
/// Returns exactly `0.0` when the base is zero or not finite, so a bad
/// denominator never leaks an infinity or NaN into a report.
pub fn pct_change(current: f64, base: f64) -> f64 {
    if base == 0.0 || !base.is_finite() {
        return 0.0;
    }
    (current / base - 1.0) * 100.0
}

/// Percent change against an optional base; absent is treated like zero.
pub fn pct_change_from(current: f64, base: Option<f64>) -> f64 {
    base.map(|b| pct_change(current, b)).unwrap_or(0.0)
}

/// Trailing simple rolling mean.
///
/// Output has the input's length. An entry is `None` until a full window of
/// `period` defined values is available; any `None` inside a window makes
/// that window's mean `None` as well.
pub fn rolling_mean(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for end in period..=values.len() {
        let window = &values[end - period..end];
        let sum: Option<f64> = window.iter().copied().sum();
        out[end - 1] = sum.map(|s| s / period as f64);
    }
    out
}

/// Maximum of the values, ignoring NaN.
pub fn max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

/// Minimum of the values, ignoring NaN.
pub fn min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
}
