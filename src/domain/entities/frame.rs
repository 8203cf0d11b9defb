//! Inbound frames read off the real-time stream

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::errors::BotError;

/// A decoded stream frame, keyed by its `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    /// Sent once by the backend right after the stream opens
    Hello(Payload),
    /// A chat message posted somewhere the bot can see
    Message(Payload),
    /// Any other frame type; the core does not interpret these
    #[serde(other)]
    Unknown,
}

impl Frame {
    /// Decode one text frame. Objects without a `type` (acks such as
    /// `{"ok":true,"reply_to":1}`) decode as [`Frame::Unknown`].
    pub fn parse(raw: &str) -> Result<Self, BotError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| BotError::Parse(e.to_string()))?;
        if let Value::Object(fields) = &value {
            if fields.get("type").map_or(true, Value::is_null) {
                return Ok(Frame::Unknown);
            }
        }
        serde_json::from_value(value).map_err(|e| BotError::Parse(e.to_string()))
    }
}

/// Fields of a frame. Only the ones the core reads are typed; the rest
/// are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Payload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payload {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Messages posted by bot integrations, including this one
    pub fn is_bot_message(&self) -> bool {
        self.subtype.as_deref() == Some("bot_message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_frame() {
        let frame = Frame::parse(
            r#"{"type":"message","text":"bot: ping","user":"U1","channel":"C1","ts":"1.0"}"#,
        )
        .unwrap();

        let Frame::Message(payload) = frame else {
            panic!("expected message frame");
        };
        assert_eq!(payload.text.as_deref(), Some("bot: ping"));
        assert_eq!(payload.user.as_deref(), Some("U1"));
        assert_eq!(payload.channel.as_deref(), Some("C1"));
        assert_eq!(payload.extra.get("ts"), Some(&Value::from("1.0")));
    }

    #[test]
    fn test_parse_hello_frame() {
        let frame = Frame::parse(r#"{"type":"hello"}"#).unwrap();
        assert_eq!(frame, Frame::Hello(Payload::default()));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let frame = Frame::parse(r#"{"type":"message","text":null,"user":null}"#).unwrap();
        let Frame::Message(payload) = frame else {
            panic!("expected message frame");
        };
        assert!(payload.text.is_none());
        assert!(payload.user.is_none());
    }

    #[test]
    fn test_unknown_type() {
        let frame = Frame::parse(r#"{"type":"presence_change","user":"U1"}"#).unwrap();
        assert_eq!(frame, Frame::Unknown);
    }

    #[test]
    fn test_untyped_frames_are_unknown() {
        assert_eq!(Frame::parse(r#"{"ok":true,"reply_to":1,"ts":"1.0"}"#).unwrap(), Frame::Unknown);
        assert_eq!(Frame::parse(r#"{"text":"no type"}"#).unwrap(), Frame::Unknown);
        assert_eq!(Frame::parse(r#"{"type":null}"#).unwrap(), Frame::Unknown);
    }

    #[test]
    fn test_malformed_frames_fail() {
        assert!(matches!(Frame::parse("not json"), Err(BotError::Parse(_))));
        assert!(matches!(Frame::parse("[1,2]"), Err(BotError::Parse(_))));
        assert!(matches!(Frame::parse(r#"{"type":"message","text":5}"#), Err(BotError::Parse(_))));
    }

    #[test]
    fn test_payload_builders() {
        let payload = Payload::from_text("hi").with_user("U1").with_channel("C1");
        assert_eq!(payload.text.as_deref(), Some("hi"));
        assert_eq!(payload.user.as_deref(), Some("U1"));
        assert_eq!(payload.channel.as_deref(), Some("C1"));
        assert!(payload.extra.is_empty());
    }

    #[test]
    fn test_bot_message_subtype() {
        assert!(Payload::from_text("hi").with_subtype("bot_message").is_bot_message());
        assert!(!Payload::from_text("hi").with_subtype("channel_join").is_bot_message());
        assert!(!Payload::from_text("hi").is_bot_message());
    }
}
