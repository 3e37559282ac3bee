//! External collaborators: market data in, chat messages out.

pub mod market_data;
pub mod notifier;
pub mod slack;
pub mod yahoo;

pub use market_data::{HistoryWindow, MarketDataProvider, StaticMarketDataProvider};
pub use notifier::Notifier;
pub use slack::SlackNotifier;
pub use yahoo::YahooMarketDataProvider;
