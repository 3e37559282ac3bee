//! Market data provider interface.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Months, Utc};

use crate::error::MarketDataError;
use crate::models::bars::{Bar, BarSeries};

/// Date range requested from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl HistoryWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// `months` calendar months ending at `end`.
    pub fn trailing_months(months: u32, end: DateTime<Utc>) -> Self {
        let start = end
            .checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { start, end }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for one symbol, ascending by date.
    ///
    /// A symbol the provider does not know yields an empty series rather
    /// than an error.
    async fn get_daily_bars(
        &self,
        symbol: &str,
        window: &HistoryWindow,
    ) -> Result<BarSeries, MarketDataError>;

    /// One series per requested symbol, in request order. Symbols are
    /// fetched sequentially; the first hard failure aborts the batch.
    async fn get_history(
        &self,
        symbols: &[String],
        window: &HistoryWindow,
    ) -> Result<Vec<BarSeries>, MarketDataError> {
        let mut out = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            out.push(self.get_daily_bars(symbol, window).await?);
        }
        Ok(out)
    }
}

/// Provider backed by bars held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    bars: HashMap<String, Vec<Bar>>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, symbol: impl Into<String>, bars: Vec<Bar>) -> Self {
        self.bars.insert(symbol.into(), bars);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn get_daily_bars(
        &self,
        symbol: &str,
        window: &HistoryWindow,
    ) -> Result<BarSeries, MarketDataError> {
        let start = window.start.date_naive();
        let end = window.end.date_naive();
        let bars = self
            .bars
            .get(symbol)
            .map(|bars| {
                bars.iter()
                    .filter(|b| b.date >= start && b.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(BarSeries::new(symbol, bars))
    }
}
