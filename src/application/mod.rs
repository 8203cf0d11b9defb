//! Application layer - Routing and outbound messaging
//!
//! This layer contains:
//! - Errors: Bot, command and config errors
//! - Messaging: Command parsing, handler registry, dispatching
//! - Services: Outbound message sending

pub mod errors;
pub mod messaging;
pub mod services;
