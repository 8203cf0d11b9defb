//! Message parser - Addressing rules and command extraction

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::Command;

/// `<target>: ` at the very start of a message
static ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^:]+): ").expect("valid address pattern"));

/// The identifier a message is addressed to, if it starts with `"<target>: "`
pub fn target_name(text: &str) -> Option<&str> {
    ADDRESS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The message with its address prefix removed and surrounding spaces trimmed
pub fn strip_address(text: &str) -> &str {
    let rest = match ADDRESS.find(text) {
        Some(prefix) => &text[prefix.end()..],
        None => text,
    };
    rest.trim()
}

/// Parse a message into a command.
///
/// Tokens are split on single spaces, so consecutive spaces produce empty
/// arguments. There is no quoting.
pub fn parse_command(text: &str) -> Command {
    let mut parts = strip_address(text).split(' ');
    let name = parts.next().unwrap_or_default().to_string();
    let args = parts.map(str::to_string).collect();
    Command::new(name, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_name() {
        assert_eq!(target_name("bot: ping"), Some("bot"));
        assert_eq!(target_name("<@U0BOT>: ping"), Some("<@U0BOT>"));
        assert_eq!(target_name("bot:ping"), None);
        assert_eq!(target_name("hello bot: ping"), Some("hello bot"));
        assert_eq!(target_name(": ping"), None);
        assert_eq!(target_name(""), None);
    }

    #[test]
    fn test_parse_simple_command() {
        let cmd = parse_command("bot: ping");
        assert_eq!(cmd.name(), "ping");
        assert!(cmd.args().is_empty());
    }

    #[test]
    fn test_parse_command_with_args() {
        let cmd = parse_command("bot: echo hello world");
        assert_eq!(cmd.name(), "echo");
        assert_eq!(cmd.args(), ["hello", "world"]);
    }

    #[test]
    fn test_parse_mention_form() {
        let cmd = parse_command("<@U0BOT>: deploy prod");
        assert_eq!(cmd.name(), "deploy");
        assert_eq!(cmd.args(), ["prod"]);
    }

    #[test]
    fn test_parse_address_only() {
        let cmd = parse_command("bot: ");
        assert_eq!(cmd.name(), "");
        assert!(cmd.args().is_empty());
    }

    #[test]
    fn test_whitespace_is_not_collapsed() {
        let cmd = parse_command("bot:   echo  a ");
        assert_eq!(cmd.name(), "echo");
        assert_eq!(cmd.args(), ["", "a"]);
    }

    #[test]
    fn test_parse_without_address() {
        let cmd = parse_command("  status now ");
        assert_eq!(cmd.name(), "status");
        assert_eq!(cmd.args(), ["now"]);
    }
}
