//! Structured notice events (unauthorized access, error pages).
//!
//! Delivery is fire-and-forget: sinks never fail and nothing is retried.

use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeEvent {
    pub message: String,
    pub pathname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NoticeEvent {
    pub fn new(message: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pathname: pathname.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

pub trait NoticeSink: Send + Sync {
    fn notice(&self, event: NoticeEvent);
}

/// Emits notices as `tracing` events at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNoticeSink;

impl NoticeSink for TracingNoticeSink {
    fn notice(&self, event: NoticeEvent) {
        tracing::info!(
            target: "talentnav::notice",
            pathname = %event.pathname,
            error = event.error.as_deref(),
            "{}",
            event.message
        );
    }
}

/// Keeps notices in memory; used by tests and diagnostics endpoints.
#[derive(Debug, Default)]
pub struct MemoryNoticeSink {
    events: Mutex<Vec<NoticeEvent>>,
}

impl MemoryNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NoticeEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl NoticeSink for MemoryNoticeSink {
    fn notice(&self, event: NoticeEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
