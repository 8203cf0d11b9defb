//! Domain layer - Core objects of the bot runtime
//!
//! This layer contains:
//! - Entities: Command, Event, Frame, Session
//! - Traits: Abstractions for infrastructure (Outbox)

pub mod entities;
pub mod traits;
