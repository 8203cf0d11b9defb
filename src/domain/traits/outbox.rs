use async_trait::async_trait;
use crate::application::errors::BotError;

/// Outbox trait - abstraction for the outbound message path
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Post a message to a channel as the authenticated user.
    ///
    /// Fire and forget: the response body is not inspected.
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), BotError>;
}
