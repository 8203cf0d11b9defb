//! Domain entities - Core objects flowing through the bot

pub mod command;
pub mod event;
pub mod frame;
pub mod session;

pub use command::Command;
pub use event::Event;
pub use frame::{Frame, Payload};
pub use session::Session;
