//! One digest run: fetch → compute → format → notify

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{error, info, warn};

use crate::config::{Config, DigestPolicy, DigestStyle};
use crate::error::DigestError;
use crate::models::watchlist::Watchlist;
use crate::report::{
    build_compact_message, build_full_message, failure_message, DigestReport, NO_DATA_MESSAGE,
    NO_ROWS_MESSAGE,
};
use crate::services::market_data::{HistoryWindow, MarketDataProvider};
use crate::services::notifier::Notifier;
use crate::services::slack::SlackNotifier;
use crate::services::yahoo::YahooMarketDataProvider;
use crate::signals::{quote_line, FeatureEngine};

/// Settings of the digest pipeline itself.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub watchlist: Watchlist,
    pub style: DigestStyle,
    pub policy: DigestPolicy,
    pub history_months: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            watchlist: Watchlist::default(),
            style: DigestStyle::default(),
            policy: DigestPolicy::default(),
            history_months: 13,
        }
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            watchlist: config.watchlist.clone(),
            style: config.style,
            policy: config.policy.clone(),
            history_months: config.market_data.history_months,
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Digest delivered covering `symbols` symbols.
    Posted { symbols: usize },
    /// Provider had nothing for any symbol; a warning was posted.
    NoData,
    /// Data arrived but no symbol met the minimum history; a warning was posted.
    NoRows,
}

pub struct DigestRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn MarketDataProvider>,
    notifier: Arc<dyn Notifier>,
}

impl DigestRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn MarketDataProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            provider,
            notifier,
        }
    }

    /// Wire the Yahoo provider and Slack notifier from configuration.
    pub fn from_config(config: &Config) -> Result<Self, DigestError> {
        let provider = Arc::new(YahooMarketDataProvider::new(&config.market_data)?);
        let notifier = Arc::new(SlackNotifier::new(&config.slack)?);
        Ok(Self::new(RuntimeConfig::from(config), provider, notifier))
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Run now, dated with the local calendar day.
    pub async fn run(&self) -> Result<RunOutcome, DigestError> {
        self.run_on(Utc::now(), Local::now().date_naive()).await
    }

    /// Run with an explicit window end and report date.
    ///
    /// On failure one best-effort failure notice is posted, then the original
    /// error is returned regardless of whether that notice went through.
    pub async fn run_on(
        &self,
        end: DateTime<Utc>,
        date: NaiveDate,
    ) -> Result<RunOutcome, DigestError> {
        match self.run_digest(end, date).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!(error = %e, "DigestRuntime: run failed: {}", e);
                if let Err(notify_err) = self.notifier.post_message(&failure_message(&e)).await {
                    warn!(
                        error = %notify_err,
                        "DigestRuntime: failure notice not delivered: {}",
                        notify_err
                    );
                }
                Err(e)
            }
        }
    }

    async fn run_digest(
        &self,
        end: DateTime<Utc>,
        date: NaiveDate,
    ) -> Result<RunOutcome, DigestError> {
        let symbols = self.config.watchlist.symbols();
        let window = HistoryWindow::trailing_months(self.config.history_months, end);

        info!(
            symbol_count = symbols.len(),
            start = %window.start,
            end = %window.end,
            "DigestRuntime: fetching history for {} symbols",
            symbols.len()
        );
        let series = self.provider.get_history(&symbols, &window).await?;

        if series.iter().all(|s| s.is_empty()) {
            warn!("DigestRuntime: no data for any symbol");
            self.notifier.post_message(NO_DATA_MESSAGE).await?;
            return Ok(RunOutcome::NoData);
        }

        let (message, count) = match self.config.style {
            DigestStyle::Compact => {
                let quotes: Vec<_> = series.iter().filter_map(quote_line).collect();
                (build_compact_message(&quotes, date), quotes.len())
            }
            DigestStyle::Full => {
                let engine = FeatureEngine::new(&self.config.policy);
                let records = engine.compute_all(&self.config.watchlist, &series);
                if records.is_empty() {
                    warn!("DigestRuntime: no symbol had enough history");
                    self.notifier.post_message(NO_ROWS_MESSAGE).await?;
                    return Ok(RunOutcome::NoRows);
                }
                let count = records.len();
                let report = DigestReport::build(records, &self.config.policy, date);
                info!(
                    records = count,
                    signals = report.signals.len(),
                    "DigestRuntime: computed {} records, {} signals",
                    count,
                    report.signals.len()
                );
                (build_full_message(&report, &self.config.policy), count)
            }
        };

        self.notifier.post_message(&message).await?;
        info!(symbols = count, "DigestRuntime: digest posted");
        Ok(RunOutcome::Posted { symbols: count })
    }
}
