use chrono::{DateTime, Utc};

use super::{Command, Payload};
use crate::application::messaging::parser;

/// One inbound frame as seen by handlers.
///
/// The command is only present after [`Event::build_command`] has run,
/// which the dispatcher does once the message is known to target the bot.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    pub received_at: DateTime<Utc>,
    payload: Payload,
    command: Option<Command>,
    sender_name: Option<String>,
}

impl Event {
    pub fn new(payload: Payload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            payload,
            command: None,
            sender_name: None,
        }
    }

    /// Message text, or `""` when the frame carried none
    pub fn message(&self) -> &str {
        self.payload.text.as_deref().unwrap_or("")
    }

    pub fn target_name(&self) -> Option<&str> {
        parser::target_name(self.message())
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.payload.user.as_deref()
    }

    /// Display name of the sender, when the session knows the user
    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    pub fn set_sender_name(&mut self, name: impl Into<String>) {
        self.sender_name = Some(name.into());
    }

    /// Channel the frame was posted in
    pub fn channel(&self) -> Option<&str> {
        self.payload.channel.as_deref()
    }

    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn build_command(&mut self) -> &Command {
        let command = parser::parse_command(self.message());
        self.command.insert(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_defaults_to_empty() {
        let event = Event::new(Payload::default());
        assert_eq!(event.message(), "");
        assert_eq!(event.target_name(), None);
    }

    #[test]
    fn test_command_absent_until_built() {
        let mut event = Event::new(Payload::from_text("bot: echo hi"));
        assert!(event.command().is_none());

        event.build_command();
        let cmd = event.command().unwrap();
        assert_eq!(cmd.name(), "echo");
        assert_eq!(cmd.args(), ["hi"]);
    }

    #[test]
    fn test_sender_name_unset_by_default() {
        let mut event = Event::new(Payload::from_text("bot: ping").with_user("U1"));
        assert_eq!(event.sender_id(), Some("U1"));
        assert_eq!(event.sender_name(), None);

        event.set_sender_name("alice");
        assert_eq!(event.sender_name(), Some("alice"));
    }

    #[test]
    fn test_channel_and_payload() {
        let before = Utc::now();
        let payload = Payload::from_text("bot: ping").with_user("U1").with_channel("C1");
        let event = Event::new(payload.clone());

        assert_eq!(event.channel(), Some("C1"));
        assert_eq!(event.payload(), &payload);
        assert!(event.received_at >= before && event.received_at <= Utc::now());
        assert_eq!(Event::new(Payload::default()).channel(), None);
    }

    #[test]
    fn test_events_get_distinct_ids() {
        let a = Event::new(Payload::default());
        let b = Event::new(Payload::default());
        assert_ne!(a.id, b.id);
    }
}
