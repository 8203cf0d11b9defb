//! Built-in commands for the bundled binary
//!
//! Replies go through [`MessageService::reply`], so a missing target channel
//! or bad user input never ends the receive loop. Only transport errors do.

use super::connection::Connection;

/// Reply for `echo` without text
pub const ECHO_USAGE: &str = "Usage: echo <text>";

/// Register `ping`, `echo`, `whoami`, `channel` and `help`, plus an init
/// and a default handler that only log.
pub fn register_defaults(conn: &mut Connection) {
    conn.on_init(|_event, messages| async move {
        match messages.channel() {
            Some(channel) => tracing::info!("Bot ready, replying in {}", channel),
            None => tracing::warn!("Bot ready, but no target channel is set"),
        }
        Ok(())
    });

    conn.on_command("ping", |_event, messages| async move {
        messages.reply("pong").await
    });

    conn.on_command("echo", |event, messages| async move {
        let text = event.command().map(|c| c.rest()).unwrap_or_default();
        if text.trim().is_empty() {
            return messages.reply(ECHO_USAGE).await;
        }
        messages.reply(&text).await
    });

    conn.on_command("whoami", |event, messages| async move {
        let reply = match event.sender_name() {
            Some(name) => format!("You are {}", name),
            None => "I don't know you yet".to_string(),
        };
        messages.reply(&reply).await
    });

    conn.on_command("channel", |event, messages| async move {
        match event.command().and_then(|c| c.args().first()) {
            Some(target) if !target.is_empty() => {
                messages.set_channel(target.as_str());
                messages.reply("Moved here").await
            }
            _ => {
                let current = messages.channel().unwrap_or_else(|| "none".to_string());
                messages.reply(&format!("Current channel: {}", current)).await
            }
        }
    });

    let mut names: Vec<String> = conn.registry().command_names().iter().map(|n| n.to_string()).collect();
    names.push("help".to_string());
    names.sort();
    let help = format!("Available commands: {}", names.join(", "));
    conn.on_command("help", move |_event, messages| {
        let help = help.clone();
        async move { messages.reply(&help).await }
    });

    conn.on_default(|event, _messages| async move {
        tracing::debug!(
            "[{}] {} in {} said: {}",
            event.id,
            event.sender_name().unwrap_or("unknown"),
            event.channel().unwrap_or("?"),
            event.message()
        );
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_defaults() {
        let mut conn = Connection::new("xoxb-test");
        register_defaults(&mut conn);

        let registry = conn.registry();
        assert_eq!(registry.command_names(), vec!["channel", "echo", "help", "ping", "whoami"]);
        assert_eq!(registry.init_handlers().len(), 1);
        assert!(registry.default_handler().is_some());
    }
}
