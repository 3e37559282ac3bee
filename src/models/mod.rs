//! Shared data models spanning the pipeline stages.

pub mod bars;
pub mod metrics;
pub mod signal;
pub mod watchlist;

pub use bars::{Bar, BarSeries};
pub use metrics::{MetricRecord, QuoteLine};
pub use signal::{Signal, SignalKind};
pub use watchlist::{Watchlist, WatchlistEntry};
