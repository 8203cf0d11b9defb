use std::sync::{Arc, RwLock};

use crate::application::errors::BotError;
use crate::domain::traits::Outbox;

/// Service for sending messages to the current target channel.
///
/// Cheap to clone; every clone shares the same target channel, so a
/// handler calling [`set_channel`](Self::set_channel) redirects later sends
/// made through the connection as well.
#[derive(Clone)]
pub struct MessageService {
    outbox: Arc<dyn Outbox>,
    channel: Arc<RwLock<Option<String>>>,
}

impl MessageService {
    pub fn new(outbox: Arc<dyn Outbox>) -> Self {
        Self {
            outbox,
            channel: Arc::new(RwLock::new(None)),
        }
    }

    pub fn channel(&self) -> Option<String> {
        self.channel.read().ok().and_then(|c| c.clone())
    }

    pub fn set_channel(&self, channel: impl Into<String>) {
        let channel = channel.into();
        tracing::debug!("Target channel set to {}", channel);
        match self.channel.write() {
            Ok(mut current) => *current = Some(channel),
            Err(poisoned) => *poisoned.into_inner() = Some(channel),
        }
    }

    /// Send a message to the target channel
    pub async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let channel = self.channel().ok_or(BotError::NoChannel)?;
        tracing::debug!("Sending to {}: {}", channel, text);
        self.outbox.post_message(&channel, text).await
    }

    /// Send a reply from a handler.
    ///
    /// A missing target channel is logged and dropped so that it cannot end
    /// the receive loop; transport errors are still returned.
    pub async fn reply(&self, text: &str) -> Result<(), BotError> {
        match self.send_message(text).await {
            Err(BotError::NoChannel) => {
                tracing::warn!("No target channel set, dropping reply: {}", text);
                Ok(())
            }
            result => result,
        }
    }
}

impl std::fmt::Debug for MessageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageService")
            .field("channel", &self.channel())
            .finish_non_exhaustive()
    }
}
