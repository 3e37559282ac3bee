//! Unit tests for the cron scheduler

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use cron::Schedule;
use market_digest::config::DEFAULT_SCHEDULE;
use market_digest::core::runtime::{DigestRuntime, RuntimeConfig};
use market_digest::core::scheduler::DigestScheduler;
use market_digest::error::NotifyError;
use market_digest::services::{Notifier, StaticMarketDataProvider};

const EVERY_SECOND: &str = "* * * * * *";

/// Counts every post; rejects all of them when `fail` is set.
#[derive(Default)]
struct CountingNotifier {
    posts: AtomicUsize,
    fail: bool,
}

impl CountingNotifier {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn count(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for CountingNotifier {
    async fn post_message(&self, _text: &str) -> Result<(), NotifyError> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NotifyError::Rejected {
                status: 500,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

fn scheduler_with(expr: &str, notifier: Arc<CountingNotifier>) -> DigestScheduler {
    // Default watchlist against an empty provider: every tick posts one warning.
    let runtime = DigestRuntime::new(
        RuntimeConfig::default(),
        Arc::new(StaticMarketDataProvider::new()),
        notifier,
    );
    DigestScheduler::new(Arc::new(runtime), Schedule::from_str(expr).unwrap())
}

fn scheduler(expr: &str) -> DigestScheduler {
    scheduler_with(expr, Arc::new(CountingNotifier::default()))
}

#[test]
fn test_default_schedule_skips_weekend() {
    let scheduler = scheduler(DEFAULT_SCHEDULE);
    // Friday 2025-03-14 after the close
    let after = Utc.with_ymd_and_hms(2025, 3, 14, 22, 0, 0).unwrap();
    assert_eq!(
        scheduler.next_tick(after),
        Some(Utc.with_ymd_and_hms(2025, 3, 17, 21, 30, 0).unwrap())
    );
}

#[tokio::test]
async fn test_start_and_stop() {
    let scheduler = scheduler("0 0 0 1 1 * 2099");
    assert!(!scheduler.is_running().await);

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn test_second_start_keeps_single_loop() {
    let notifier = Arc::new(CountingNotifier::default());
    let scheduler = scheduler_with(EVERY_SECOND, notifier.clone());

    scheduler.start().await;
    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let after_stop = notifier.count();
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(notifier.count(), after_stop);
}

#[tokio::test]
async fn test_failed_run_waits_for_next_tick() {
    let notifier = Arc::new(CountingNotifier::failing());
    let scheduler = scheduler_with(EVERY_SECOND, notifier.clone());

    scheduler.start().await;
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;

    // Each failed tick makes two attempts: the warning and the failure notice.
    assert!(notifier.count() > 2, "only {} attempts", notifier.count());
}
