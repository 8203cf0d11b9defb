//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("No target channel registered")]
    NoChannel,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by command handlers
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_converts_into_bot_error() {
        let err: BotError = CommandError::InvalidArgs("missing text".to_string()).into();
        assert!(matches!(err, BotError::Command(_)));
        assert_eq!(err.to_string(), "Command error: Invalid arguments: missing text");
    }

    #[test]
    fn test_config_error_display() {
        let err: BotError = ConfigError::MissingField("bot.token".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: bot.token"
        );
    }

    #[test]
    fn test_no_channel_display() {
        assert_eq!(BotError::NoChannel.to_string(), "No target channel registered");
    }
}
