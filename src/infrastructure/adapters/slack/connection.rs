//! Real-time connection - handshake, receive loop and handler registration

use std::future::Future;
use std::sync::Arc;

use futures::StreamExt;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use super::api::SlackApi;
use super::socket::{self, WsStream};
use crate::application::errors::BotError;
use crate::application::messaging::{handler, Dispatcher, HandlerRegistry, HandlerResult};
use crate::application::services::MessageService;
use crate::domain::entities::{Event, Frame, Session};
use crate::infrastructure::config::{Config, DEFAULT_API_BASE, DEFAULT_ORIGIN};

/// A bot connection.
///
/// Register handlers first, then call [`run`](Self::run). `run` consumes the
/// connection, so handlers cannot be added once the receive loop has
/// started. Use [`messages`](Self::messages) beforehand to keep a handle
/// for sending from elsewhere.
///
/// ```no_run
/// use rtm_bot::Connection;
///
/// # async fn example() -> Result<(), rtm_bot::BotError> {
/// let mut conn = Connection::new("xoxb-token");
/// conn.set_channel("C0123");
/// conn.on_command("ping", |_event, messages| async move {
///     messages.send_message("pong").await
/// });
/// conn.run().await
/// # }
/// ```
pub struct Connection {
    api: Arc<SlackApi>,
    origin: String,
    messages: MessageService,
    registry: HandlerRegistry,
}

impl Connection {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoints(token, DEFAULT_API_BASE, DEFAULT_ORIGIN)
    }

    /// Connection against a non-default API base and stream origin
    pub fn with_endpoints(
        token: impl Into<String>,
        api_base: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        let api = Arc::new(SlackApi::new(token, api_base));
        Self {
            messages: MessageService::new(api.clone()),
            api,
            origin: origin.into(),
            registry: HandlerRegistry::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, BotError> {
        config.validate()?;
        let conn = Self::with_endpoints(
            config.token()?,
            config.slack.api_base.as_str(),
            config.slack.origin.as_str(),
        );
        if let Some(channel) = &config.bot.channel {
            conn.set_channel(channel.as_str());
        }
        Ok(conn)
    }

    pub fn channel(&self) -> Option<String> {
        self.messages.channel()
    }

    pub fn set_channel(&self, channel: impl Into<String>) {
        self.messages.set_channel(channel);
    }

    /// Handle for sending, sharing this connection's target channel
    pub fn messages(&self) -> MessageService {
        self.messages.clone()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Run when the stream says hello, in registration order
    pub fn on_init<F, Fut>(&mut self, f: F)
    where
        F: Fn(Event, MessageService) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.registry.add_init(handler(f));
    }

    /// Run on every message addressed to the bot, after any named handler
    pub fn on_default<F, Fut>(&mut self, f: F)
    where
        F: Fn(Event, MessageService) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.registry.set_default(handler(f));
    }

    /// Run when an addressed message parses to `name`
    pub fn on_command<F, Fut>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(Event, MessageService) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.registry.add_command(name, handler(f));
    }

    pub async fn send_message(&self, text: &str) -> Result<(), BotError> {
        self.messages.send_message(text).await
    }

    /// Handshake, open the stream and process frames.
    ///
    /// Only returns on failure: handshake, stream errors, a closed stream
    /// or a handler error.
    pub async fn run(self) -> Result<(), BotError> {
        let handshake = self.api.rtm_start().await?;
        self.listen(handshake.session, &handshake.url).await
    }

    /// Open `url` and process frames with an already established session
    pub async fn listen(self, session: Session, url: &str) -> Result<(), BotError> {
        let stream = socket::open(url, &self.origin).await?;
        let dispatcher = Dispatcher::new(session, self.registry, self.messages);
        receive_loop(stream, &dispatcher).await
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("api", &self.api)
            .field("origin", &self.origin)
            .field("channel", &self.channel())
            .field("registry", &self.registry)
            .finish()
    }
}

async fn receive_loop(mut stream: WsStream, dispatcher: &Dispatcher) -> Result<(), BotError> {
    tracing::info!("Starting message loop...");

    loop {
        let Some(message) = stream.next().await else {
            return Err(BotError::WebSocket("Stream ended".to_string()));
        };
        let message = message.map_err(|e| BotError::WebSocket(format!("Read error: {}", e)))?;

        match message {
            WsMessage::Text(text) => {
                let frame = match Frame::parse(&text) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::warn!("Skipping malformed frame: {}", e);
                        continue;
                    }
                };
                let outcome = dispatcher.dispatch(frame).await?;
                tracing::trace!("Frame dispatched: {:?}", outcome);
            }
            WsMessage::Close(frame) => {
                let reason = frame.map(|f| f.reason.to_string()).unwrap_or_default();
                return Err(BotError::WebSocket(format!("Stream closed by server: {}", reason)));
            }
            // tungstenite queues the pong for pings itself
            _ => {}
        }
    }
}
