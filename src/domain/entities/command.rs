use std::fmt;

/// A parsed directive addressed to the bot: a name plus its arguments.
///
/// The name may be empty when the message held nothing but the address
/// prefix. That command is still dispatchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments joined back with single spaces
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_accessors() {
        let cmd = Command::new("echo", vec!["hello".to_string(), "world".to_string()]);
        assert_eq!(cmd.name(), "echo");
        assert_eq!(cmd.args(), ["hello", "world"]);
        assert_eq!(cmd.rest(), "hello world");
    }

    #[test]
    fn test_command_display() {
        let cmd = Command::new("echo", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cmd.to_string(), "echo a b");
        assert_eq!(Command::new("ping", vec![]).to_string(), "ping");
    }
}
