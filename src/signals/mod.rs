//! Metric computation, ranking and signal detection.

pub mod detection;
pub mod engine;
pub mod ranking;

pub use detection::*;
pub use engine::{quote_line, FeatureEngine, MIN_BARS};
pub use ranking::*;
