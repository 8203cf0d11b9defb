//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Slack real-time messaging)

pub mod config;
pub mod adapters;
