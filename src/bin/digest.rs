//! Market Digest
//!
//! Runs the digest once and exits. A failed run posts a failure notice to
//! the channel and exits non-zero.

use dotenvy::dotenv;
use market_digest::config::{get_environment, Config};
use market_digest::core::runtime::DigestRuntime;
use market_digest::logging;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    info!(
        environment = %get_environment(),
        symbols = config.watchlist.len(),
        style = ?config.style,
        "Starting Market Digest"
    );

    let runtime = DigestRuntime::from_config(&config)?;
    let outcome = runtime.run().await?;
    info!(outcome = ?outcome, "Market Digest finished");

    Ok(())
}
