//! In-memory implementation of the `EventSink` trait for testing and development

use crate::{EventSink, GridError, GridEvent, GridResult};
use async_trait::async_trait;
use std::sync::Mutex;

/// EventSink implementation that records envelopes instead of sending them.
///
/// Suitable for:
/// - Unit tests (no external dependencies, no network)
/// - Integration tests asserting on exactly what the service published
/// - Local development without a reachable topic endpoint
///
/// Can be armed to fail every send, to exercise the error path of callers.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, GridEvent)>>,
    fail_with: Option<String>,
}

impl RecordingSink {
    /// Create a sink that accepts and records every envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose every send fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Snapshot of everything sent so far, as `(endpoint, envelope)` pairs
    pub fn sent(&self) -> Vec<(String, GridEvent)> {
        self.sent.lock().expect("recording sink poisoned").clone()
    }

    /// Number of envelopes accepted so far
    pub fn count(&self) -> usize {
        self.sent.lock().expect("recording sink poisoned").len()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn send(&self, endpoint: &str, event: &GridEvent) -> GridResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(GridError::Http(message.clone()));
        }

        self.sent
            .lock()
            .expect("recording sink poisoned")
            .push((endpoint.to_string(), event.clone()));
        Ok(())
    }
}
