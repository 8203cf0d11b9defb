//! Message dispatcher - Routes stream frames to handlers

use crate::application::errors::BotError;
use crate::application::services::MessageService;
use crate::domain::entities::{Event, Frame, Payload, Session};
use super::registry::HandlerRegistry;

/// Why a frame produced no handler call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Posted by a bot integration
    BotMessage,
    /// Not prefixed with the bot's name or mention
    NotAddressed,
    /// Frame type the bot does not handle
    UnknownType,
}

/// What dispatching a frame did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `hello` frame; number of init handlers run
    Initialized(usize),
    /// Message addressed to the bot
    Handled {
        command: String,
        named: bool,
        default: bool,
    },
    Ignored(IgnoreReason),
}

/// Routes frames for one connection.
///
/// Handlers run one at a time and are awaited before the next frame is
/// read. A handler error is returned as-is and ends the receive loop.
#[derive(Debug)]
pub struct Dispatcher {
    session: Session,
    registry: HandlerRegistry,
    messages: MessageService,
}

impl Dispatcher {
    pub fn new(session: Session, registry: HandlerRegistry, messages: MessageService) -> Self {
        Self {
            session,
            registry,
            messages,
        }
    }

    pub async fn dispatch(&self, frame: Frame) -> Result<Outcome, BotError> {
        match frame {
            Frame::Hello(payload) => self.on_hello(payload).await,
            Frame::Message(payload) => self.on_message(payload).await,
            Frame::Unknown => Ok(Outcome::Ignored(IgnoreReason::UnknownType)),
        }
    }

    async fn on_hello(&self, payload: Payload) -> Result<Outcome, BotError> {
        let mut event = Event::new(payload);
        event.build_command();

        let handlers = self.registry.init_handlers();
        tracing::info!("Connected as {}, running {} init handlers", self.session.bot_user_name(), handlers.len());
        for handler in handlers {
            handler(event.clone(), self.messages.clone()).await?;
        }
        Ok(Outcome::Initialized(handlers.len()))
    }

    async fn on_message(&self, payload: Payload) -> Result<Outcome, BotError> {
        if payload.is_bot_message() {
            return Ok(Outcome::Ignored(IgnoreReason::BotMessage));
        }

        let mut event = Event::new(payload);
        let sender = event
            .sender_id()
            .and_then(|id| self.session.display_name(id))
            .map(str::to_string);
        if let Some(name) = sender {
            event.set_sender_name(name);
        }

        if !self.session.is_addressed(event.target_name()) {
            return Ok(Outcome::Ignored(IgnoreReason::NotAddressed));
        }

        let name = event.build_command().name().to_string();
        tracing::debug!(
            "[{}] command '{}' from {}",
            event.id,
            name,
            event.sender_name().unwrap_or("unknown")
        );

        let named = match self.registry.command(&name) {
            Some(handler) => {
                handler(event.clone(), self.messages.clone()).await?;
                true
            }
            None => false,
        };

        let default = match self.registry.default_handler() {
            Some(handler) => {
                handler(event, self.messages.clone()).await?;
                true
            }
            None => false,
        };

        Ok(Outcome::Handled {
            command: name,
            named,
            default,
        })
    }
}
