//! Cron-based scheduler running one digest per tick

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cron::Schedule;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::runtime::DigestRuntime;

pub struct DigestScheduler {
    runtime: Arc<DigestRuntime>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl DigestScheduler {
    pub fn new(runtime: Arc<DigestRuntime>, schedule: Schedule) -> Self {
        let next = schedule.upcoming(Utc).next();
        info!(next = ?next, "DigestScheduler: created, first run at {:?}", next);
        Self {
            runtime,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Next tick strictly after `after`.
    pub fn next_tick(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.schedule.after(&after).next()
    }

    /// Start the scheduler loop in the background.
    ///
    /// A failed run is logged (its failure notice already went out) and the
    /// loop waits for the next tick. Calling this while the loop is running
    /// does nothing.
    pub async fn start(&self) {
        let mut slot = self.handle.write().await;
        if slot.as_ref().is_some_and(|h| !h.is_finished()) {
            warn!("DigestScheduler: already running, ignoring start");
            return;
        }

        let runtime = self.runtime.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("DigestScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(Utc).next() else {
                    info!("DigestScheduler: schedule has no upcoming ticks, stopping");
                    break;
                };
                let wait = (next_tick - Utc::now()).to_std().unwrap_or_default();
                info!(next = %next_tick, "DigestScheduler: next run at {}", next_tick);
                tokio::time::sleep(wait).await;

                match runtime.run().await {
                    Ok(outcome) => {
                        info!(outcome = ?outcome, "DigestScheduler: run finished: {:?}", outcome)
                    }
                    Err(e) => error!(error = %e, "DigestScheduler: run failed: {}", e),
                }
            }
        });

        *slot = Some(handle);
        info!("DigestScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("DigestScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
