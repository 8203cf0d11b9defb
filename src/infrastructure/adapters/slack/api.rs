//! Web API client - session start and message posting

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::BotError;
use crate::domain::entities::Session;
use crate::domain::traits::Outbox;

/// Result of a successful `rtm.start`
#[derive(Debug, Clone)]
pub struct Handshake {
    pub session: Session,
    /// Streaming endpoint to open
    pub url: String,
}

/// Raw `rtm.start` response
#[derive(Debug, Default, Deserialize)]
struct RtmStartResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    url: String,
    #[serde(default)]
    error: String,
    #[serde(default, rename = "self")]
    identity: Identity,
    #[serde(default)]
    users: Vec<Identity>,
}

#[derive(Debug, Default, Deserialize)]
struct Identity {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
}

impl RtmStartResponse {
    fn into_handshake(self) -> Result<Handshake, BotError> {
        if !self.ok {
            let error = if self.error.is_empty() { "unknown" } else { self.error.as_str() };
            return Err(BotError::Auth(format!("rtm.start error: {}", error)));
        }

        let users = self.users.into_iter().map(|u| (u.id, u.name));
        Ok(Handshake {
            session: Session::new(self.identity.id, self.identity.name, users),
            url: self.url,
        })
    }
}

/// Web API client bound to one credential token
#[derive(Clone)]
pub struct SlackApi {
    client: Client,
    base_url: String,
    token: String,
}

impl SlackApi {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Start a real-time session
    pub async fn rtm_start(&self) -> Result<Handshake, BotError> {
        let response = self.client
            .post(self.api_url("rtm.start"))
            .form(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| BotError::Network(format!("rtm.start request failed: {}", e)))?;

        let data: RtmStartResponse = response
            .json()
            .await
            .map_err(|e| BotError::Parse(format!("rtm.start response parse failed: {}", e)))?;

        let handshake = data.into_handshake()?;
        tracing::info!(
            "Session started as {} ({}), {} known users",
            handshake.session.bot_user_name(),
            handshake.session.bot_user_id(),
            handshake.session.user_count()
        );
        Ok(handshake)
    }
}

impl std::fmt::Debug for SlackApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Outbox for SlackApi {
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), BotError> {
        let response = self.client
            .post(self.api_url("chat.postMessage"))
            .form(&[
                ("token", self.token.as_str()),
                ("channel", channel),
                ("text", text),
                ("as_user", "true"),
            ])
            .send()
            .await
            .map_err(|e| BotError::Network(format!("chat.postMessage request failed: {}", e)))?;

        tracing::debug!("chat.postMessage returned {}", response.status());
        Ok(())
    }
}
