//! Chat delivery interface.

use async_trait::async_trait;

use crate::error::NotifyError;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message. Any non-success is an error.
    async fn post_message(&self, text: &str) -> Result<(), NotifyError>;
}
