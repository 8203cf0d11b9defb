//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Default web API base
pub const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Origin header the streaming endpoint expects
pub const DEFAULT_ORIGIN: &str = "https://slack.com/";

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub slack: SlackConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub token: Option<String>,
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SlackConfig {
    pub api_base: String,
    pub origin: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Override fields from `SLACK_TOKEN`, `SLACK_CHANNEL` and `SLACK_API_BASE`
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("SLACK_TOKEN") {
            self.bot.token = Some(token);
        }

        if let Ok(channel) = std::env::var("SLACK_CHANNEL") {
            self.bot.channel = Some(channel);
        }

        if let Ok(base) = std::env::var("SLACK_API_BASE") {
            self.slack.api_base = base;
        }
    }

    pub fn token(&self) -> Result<&str, ConfigError> {
        match self.bot.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingField("bot.token".to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.token()?;
        if !self.slack.api_base.starts_with("http://") && !self.slack.api_base.starts_with("https://") {
            return Err(ConfigError::InvalidValue(format!(
                "slack.api-base must be an http(s) URL: {}",
                self.slack.api_base
            )));
        }
        Ok(())
    }
}
