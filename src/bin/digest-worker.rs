//! Market Digest Worker
//!
//! Runs the digest on the `DIGEST_SCHEDULE` cron until Ctrl-C.

use dotenvy::dotenv;
use market_digest::config::{get_environment, Config};
use market_digest::core::runtime::DigestRuntime;
use market_digest::core::scheduler::DigestScheduler;
use market_digest::logging;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    let schedule = config.schedule()?;
    info!("Starting Market Digest Worker");
    info!(environment = %get_environment(), "Environment");
    info!(
        symbols = config.watchlist.len(),
        style = ?config.style,
        min_bars = config.policy.min_bars,
        "Watchlist: {} symbols",
        config.watchlist.len()
    );

    let runtime = Arc::new(DigestRuntime::from_config(&config)?);
    let scheduler = DigestScheduler::new(runtime, schedule);
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
