//! # Event Grid Client
//!
//! A platform-level abstraction for publishing events to a managed
//! event-distribution topic.
//!
//! ## Why a trait seam
//!
//! The destination topic is an external managed service. Putting the publish
//! call behind the `EventSink` trait allows:
//! - Services to be wired against `HttpSink` in production
//! - Tests to substitute `RecordingSink` and assert on what was sent
//! - Credential resolution to stay injectable (`CredentialProvider`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use event_grid::{EnvCredential, EventSink, GridEvent, HttpSink};
//! use std::sync::Arc;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sink: Arc<dyn EventSink> = Arc::new(HttpSink::new(Arc::new(EnvCredential::new()))?);
//!
//! let event = GridEvent::new(
//!     "Custom.TestEvent",
//!     "test/event",
//!     "1.0",
//!     json!({ "message": "hello" }),
//! );
//! sink.send("https://topic.example", &event).await?;
//! # Ok(())
//! # }
//! ```

mod credential;
mod envelope;
mod http;
mod recording;

pub use credential::{CredentialProvider, EnvCredential, StaticCredential};
pub use envelope::{generate_event_id, GridEvent};
pub use http::HttpSink;
pub use recording::RecordingSink;

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur while resolving credentials or publishing events
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("credential error: {0}")]
    Credential(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl GridError {
    /// Check if this is a client error (4xx) from the topic endpoint
    pub fn is_client_error(&self) -> bool {
        matches!(self, GridError::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx) from the topic endpoint
    pub fn is_server_error(&self) -> bool {
        matches!(self, GridError::Api { status, .. } if (500..600).contains(status))
    }
}

/// Result type for event grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Destination for published events.
///
/// One call per envelope, no retry, no batching. Delivery to downstream
/// subscribers is entirely the distribution service's concern.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish a single envelope to the topic endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The topic endpoint URL to publish to
    /// * `event` - The envelope to publish
    ///
    /// # Returns
    /// * `Ok(())` if the topic accepted the envelope
    /// * `Err(GridError)` on credential, transport, or endpoint failure
    async fn send(&self, endpoint: &str, event: &GridEvent) -> GridResult<()>;
}

impl fmt::Debug for dyn EventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventSink")
    }
}
