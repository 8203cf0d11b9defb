//! Handler registry - Init, default and per-command callbacks

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::services::MessageService;
use crate::domain::entities::Event;

/// Handler result
pub type HandlerResult = Result<(), BotError>;

/// Boxed future returned by a handler
pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// Handler function type
pub type Handler = Arc<dyn Fn(Event, MessageService) -> HandlerFuture + Send + Sync>;

/// Wrap an async closure into a [`Handler`]
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Event, MessageService) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(move |event: Event, messages: MessageService| -> HandlerFuture {
        Box::pin(f(event, messages))
    })
}

/// Registered callbacks, filled in before the receive loop starts
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    init: Vec<Handler>,
    default: Option<Handler>,
    commands: HashMap<String, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run on the `hello` frame, in registration order
    pub fn add_init(&mut self, handler: Handler) {
        self.init.push(handler);
    }

    /// Run on every message addressed to the bot
    pub fn set_default(&mut self, handler: Handler) {
        self.default = Some(handler);
    }

    /// Run when the parsed command name matches. Re-registering a name
    /// replaces the earlier handler.
    pub fn add_command(&mut self, name: impl Into<String>, handler: Handler) {
        let name = name.into();
        if self.commands.insert(name.clone(), handler).is_some() {
            tracing::debug!("Replaced handler for command '{}'", name);
        }
    }

    pub fn init_handlers(&self) -> &[Handler] {
        &self.init
    }

    pub fn default_handler(&self) -> Option<&Handler> {
        self.default.as_ref()
    }

    pub fn command(&self, name: &str) -> Option<&Handler> {
        self.commands.get(name)
    }

    /// Registered command names, sorted
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("init", &self.init.len())
            .field("default", &self.default.is_some())
            .field("commands", &self.command_names())
            .finish()
    }
}
