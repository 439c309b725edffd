//! # Notification Sinks
//!
//! Failures inside cart operations never reach the caller. They end up here
//! as one short message per failed operation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Fire-and-forget sink for user-visible failure messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints notifications to stderr, keeping stdout for the cart itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("✖ {message}");
    }
}

/// Emits notifications as warn-level log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(notification = %message, "User notification");
    }
}

/// Which sink the app should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    #[default]
    Console,
    Log,
}

impl NotifierKind {
    pub fn build(self) -> Arc<dyn Notifier> {
        match self {
            NotifierKind::Console => Arc::new(ConsoleNotifier),
            NotifierKind::Log => Arc::new(TracingNotifier),
        }
    }
}

impl std::str::FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "stderr" => Ok(NotifierKind::Console),
            "log" | "tracing" => Ok(NotifierKind::Log),
            other => Err(format!(
                "Unknown notifier: '{}'. Valid options: console, log",
                other
            )),
        }
    }
}
