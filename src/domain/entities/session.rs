use std::collections::HashMap;

/// Identity captured once at handshake time.
///
/// Immutable for the life of the connection; the user table is never
/// refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    bot_user_id: String,
    bot_user_name: String,
    users: HashMap<String, String>,
}

impl Session {
    /// Build a session. Later duplicates in `users` overwrite earlier ones.
    pub fn new<I>(bot_user_id: impl Into<String>, bot_user_name: impl Into<String>, users: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            bot_user_id: bot_user_id.into(),
            bot_user_name: bot_user_name.into(),
            users: users.into_iter().collect(),
        }
    }

    pub fn bot_user_id(&self) -> &str {
        &self.bot_user_id
    }

    pub fn bot_user_name(&self) -> &str {
        &self.bot_user_name
    }

    /// Mention form of the bot, e.g. `<@U0BOT>`
    pub fn mention(&self) -> String {
        format!("<@{}>", self.bot_user_id)
    }

    /// Whether a message target names this bot
    pub fn is_addressed(&self, target: Option<&str>) -> bool {
        match target {
            Some(name) => name == self.bot_user_name || name == self.mention(),
            None => false,
        }
    }

    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.users.get(user_id).map(String::as_str)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            "U0BOT",
            "bot",
            vec![("U1".to_string(), "alice".to_string())],
        )
    }

    #[test]
    fn test_addressing() {
        let session = session();
        assert!(session.is_addressed(Some("bot")));
        assert!(session.is_addressed(Some("<@U0BOT>")));
        assert!(!session.is_addressed(Some("other")));
        assert!(!session.is_addressed(Some("U0BOT")));
        assert!(!session.is_addressed(Some("")));
        assert!(!session.is_addressed(None));
    }

    #[test]
    fn test_display_name_lookup() {
        let session = session();
        assert_eq!(session.display_name("U1"), Some("alice"));
        assert_eq!(session.display_name("U2"), None);
    }

    #[test]
    fn test_duplicate_user_ids_last_wins() {
        let session = Session::new(
            "U0BOT",
            "bot",
            vec![
                ("U1".to_string(), "alice".to_string()),
                ("U2".to_string(), "bob".to_string()),
                ("U1".to_string(), "alicia".to_string()),
            ],
        );
        assert_eq!(session.display_name("U1"), Some("alicia"));
        assert_eq!(session.user_count(), 2);
    }
}
