//! Message text

use chrono::NaiveDate;

use crate::config::DigestPolicy;
use crate::models::metrics::{MetricRecord, QuoteLine};
use crate::models::signal::{Signal, SignalKind};

use super::DigestReport;

pub const NO_DATA_MESSAGE: &str = "⚠️ Market Digest: No data available for tickers.";
pub const NO_ROWS_MESSAGE: &str = "⚠️ Market Digest: No rows computed (check tickers/network).";

pub fn failure_message(error: &dyn std::fmt::Display) -> String {
    format!("❌ Market Digest failed: `{}`", error)
}

/// `*Name* (SYM): 123.45 | 1d 1.23% | 5d -0.45% | RSI 56 | ΔHi -3.21%`
pub fn format_row(record: &MetricRecord) -> String {
    let rsi = match record.rsi14 {
        Some(value) => format!("{:.0}", value),
        None => "n/a".to_string(),
    };
    format!(
        "*{}* ({}): {:.2} | 1d {:.2}% | 5d {:.2}% | RSI {} | ΔHi {:.2}%",
        record.name,
        record.symbol,
        record.last_price,
        record.change_1d_pct,
        record.change_5d_pct,
        rsi,
        record.from_high_pct
    )
}

pub fn format_signal(signal: &Signal, policy: &DigestPolicy) -> String {
    match signal.kind {
        SignalKind::Oversold => format!(
            "• *Oversold* RSI<{} → {} ({})",
            policy.rsi_oversold, signal.name, signal.symbol
        ),
        SignalKind::Overbought => format!(
            "• *Overbought* RSI>{} → {} ({})",
            policy.rsi_overbought, signal.name, signal.symbol
        ),
        SignalKind::NearHigh => format!(
            "• *Near 52w High* (<{}%): {} ({})",
            policy.near_high_pct, signal.name, signal.symbol
        ),
        SignalKind::NearLow => format!(
            "• *Near 52w Low* (<{}%): {} ({})",
            policy.near_low_pct, signal.name, signal.symbol
        ),
    }
}

/// Full digest: movers and signals.
pub fn build_full_message(report: &DigestReport, policy: &DigestPolicy) -> String {
    let mut lines = vec![format!(
        "*Daily Market Digest — {}*",
        report.date.format("%Y-%m-%d")
    )];

    lines.push("\n*Top movers (1d):*".to_string());
    lines.extend(report.top.iter().map(|r| format!("• {}", format_row(r))));
    lines.push("\n*Bottom movers (1d):*".to_string());
    lines.extend(report.bottom.iter().map(|r| format!("• {}", format_row(r))));

    if report.signals.is_empty() {
        lines.push("\n*Signals:* None".to_string());
    } else {
        lines.push("\n*Signals:*".to_string());
        lines.extend(report.signals.iter().map(|s| format_signal(s, policy)));
    }

    lines.join("\n")
}

/// Compact digest: one line per ticker.
pub fn build_compact_message(quotes: &[QuoteLine], date: NaiveDate) -> String {
    let mut lines = vec![format!("*📅 Market Digest – {}*", date.format("%Y-%m-%d"))];
    lines.extend(quotes.iter().map(|q| {
        format!(
            "`{}`: Close ${:.2}, Change {:+.2}%, Vol {}",
            q.symbol,
            q.last_close,
            q.change_pct,
            group_thousands(q.volume)
        )
    }));
    lines.join("\n")
}

/// `1234567` → `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
