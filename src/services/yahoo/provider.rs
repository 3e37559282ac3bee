//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::config::MarketDataConfig;
use crate::error::MarketDataError;
use crate::models::bars::{Bar, BarSeries};
use crate::services::market_data::{HistoryWindow, MarketDataProvider};

use super::messages::{ChartResponse, ChartResult};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; market-digest/0.1)";

pub struct YahooMarketDataProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooMarketDataProvider {
    pub fn new(config: &MarketDataConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MarketDataError::Client(e.to_string()))?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }

    fn chart_url(&self, symbol: &str, window: &HistoryWindow) -> Result<Url, MarketDataError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MarketDataError::Client(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("period1", &window.start.timestamp().to_string())
            .append_pair("period2", &window.end.timestamp().to_string())
            .append_pair("interval", "1d")
            .append_pair("includeAdjustedClose", "true");
        Ok(url)
    }
}

/// Convert a chart result to bars.
///
/// When the payload carries an adjusted series it is the only price source,
/// so a null adjusted close drops the row. Rows without a finite close or
/// with an unrepresentable timestamp are dropped.
pub fn parse_chart_result(symbol: &str, result: &ChartResult) -> BarSeries {
    let Some(timestamps) = result.timestamp.as_ref() else {
        return BarSeries::empty(symbol);
    };
    let quote = result.indicators.quote.first();
    let adjusted = result
        .indicators
        .adjclose
        .as_ref()
        .and_then(|a| a.first())
        .map(|a| a.adjclose.as_slice());
    let offset = result.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let close = match adjusted {
            Some(adjusted) => adjusted.get(i).copied().flatten(),
            None => quote.and_then(|q| q.close.get(i).copied().flatten()),
        };
        let Some(close) = close.filter(|c| c.is_finite()) else {
            continue;
        };
        let Some(when) = ts
            .checked_add(offset)
            .and_then(|local| DateTime::from_timestamp(local, 0))
        else {
            continue;
        };
        let volume = quote
            .and_then(|q| q.volume.get(i).copied().flatten())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v as u64);
        bars.push(Bar::new(when.date_naive(), close, volume));
    }

    BarSeries::new(symbol, bars)
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_daily_bars(
        &self,
        symbol: &str,
        window: &HistoryWindow,
    ) -> Result<BarSeries, MarketDataError> {
        let url = self.chart_url(symbol, window)?;
        debug!(symbol = %symbol, url = %url, "Yahoo: requesting daily chart for {}", symbol);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| MarketDataError::Transport {
                symbol: symbol.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(symbol = %symbol, "Yahoo: unknown symbol {}, returning empty series", symbol);
            return Ok(BarSeries::empty(symbol));
        }
        if !status.is_success() {
            return Err(MarketDataError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| MarketDataError::Transport {
                symbol: symbol.to_string(),
                source,
            })?;
        let chart: ChartResponse =
            serde_json::from_str(&body).map_err(|e| MarketDataError::Payload {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(error) = chart.chart.error {
            warn!(
                symbol = %symbol,
                code = %error.code,
                "Yahoo: chart error for {}: {}",
                symbol,
                error.description
            );
            return Ok(BarSeries::empty(symbol));
        }

        let series = match chart.chart.result.as_ref().and_then(|r| r.first()) {
            Some(result) => parse_chart_result(symbol, result),
            None => BarSeries::empty(symbol),
        };

        debug!(
            symbol = %symbol,
            count = series.len(),
            "Yahoo: fetched {} bars for {}",
            series.len(),
            symbol
        );
        Ok(series)
    }
}
