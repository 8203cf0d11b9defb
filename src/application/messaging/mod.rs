//! Message handling - Parsing, handler registry and dispatch

pub mod dispatcher;
pub mod parser;
pub mod registry;

pub use dispatcher::{Dispatcher, IgnoreReason, Outcome};
pub use registry::{handler, Handler, HandlerFuture, HandlerRegistry, HandlerResult};
