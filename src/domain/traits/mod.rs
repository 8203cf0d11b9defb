//! Domain traits - Abstractions for infrastructure implementations

pub mod outbox;

pub use outbox::Outbox;
