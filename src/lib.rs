//! Minimal chat-bot runtime over a real-time messaging stream.
//!
//! A [`Connection`] performs the session handshake, opens the stream and
//! routes every message addressed to the bot (`"<name>: ..."` or
//! `"<@id>: ..."`) to registered handlers as a parsed [`Command`].

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{BotError, CommandError, ConfigError};
pub use application::messaging::{Dispatcher, HandlerRegistry, HandlerResult, IgnoreReason, Outcome};
pub use application::services::MessageService;
pub use domain::entities::{Command, Event, Frame, Payload, Session};
pub use domain::traits::Outbox;
pub use infrastructure::adapters::slack::{register_defaults, Connection, Handshake, SlackApi};
pub use infrastructure::config::Config;
