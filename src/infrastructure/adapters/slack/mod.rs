//! Slack adapter - real-time messaging connection

pub mod api;
pub mod builtin;
pub mod connection;
pub mod socket;

pub use api::{Handshake, SlackApi};
pub use builtin::register_defaults;
pub use connection::Connection;
