//! # Event Envelope
//!
//! The wire-level envelope exchanged with the event-distribution topic.
//!
//! ## Envelope Fields
//!
//! - `id`: producer-assigned, unique per event
//! - `event_type`: producer-chosen category tag
//! - `subject`: producer-chosen topic path
//! - `data_version`: schema version of the payload shape
//! - `data`: open-ended JSON payload
//! - `event_time`: assigned by the transport at delivery, absent on publish
//! - `topic`: originating channel, assigned by the transport
//!
//! The topic speaks camelCase JSON (`eventType`, `dataVersion`, `eventTime`),
//! so the struct serializes with that convention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single event envelope.
///
/// Constructed fresh on every publish and never mutated afterwards. The
/// transport-owned fields (`event_time`, `topic`) are unset on the producer
/// side and filled in by the distribution service before redelivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEvent {
    /// Producer-assigned identifier, unique per event
    pub id: String,

    /// Category tag, e.g. "Custom.TestEvent"
    pub event_type: String,

    /// Topic path, e.g. "test/event"
    pub subject: String,

    /// Schema version of `data`
    pub data_version: String,

    /// Event-specific payload
    pub data: serde_json::Value,

    /// Delivery instant, assigned by the transport; absent on publish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<DateTime<Utc>>,

    /// Originating channel, assigned by the transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl GridEvent {
    /// Create a new envelope with a generated id.
    ///
    /// `event_time` and `topic` are left unset; the transport owns them.
    pub fn new(
        event_type: impl Into<String>,
        subject: impl Into<String>,
        data_version: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: generate_event_id(),
            event_type: event_type.into(),
            subject: subject.into(),
            data_version: data_version.into(),
            data,
            event_time: None,
            topic: None,
        }
    }

    /// Create an envelope with an explicit id (useful for testing)
    pub fn with_id(
        id: impl Into<String>,
        event_type: impl Into<String>,
        subject: impl Into<String>,
        data_version: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            ..Self::new(event_type, subject, data_version, data)
        }
    }
}

/// Generate a producer-side event id.
///
/// Format: `event-` followed by the UTC instant as `YYYYMMDDHHMMSS` plus
/// six fractional-second digits, 20 digits in total.
pub fn generate_event_id() -> String {
    format!("event-{}", Utc::now().format("%Y%m%d%H%M%S%6f"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_id_format() {
        let id = generate_event_id();
        let digits = id.strip_prefix("event-").expect("missing event- prefix");
        assert_eq!(digits.len(), 20, "expected 20 timestamp digits, got {id}");
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "non-digit in {id}");
    }

    #[test]
    fn test_new_leaves_transport_fields_unset() {
        let event = GridEvent::new("Custom.TestEvent", "test/event", "1.0", json!({"k": "v"}));
        assert_eq!(event.event_type, "Custom.TestEvent");
        assert_eq!(event.subject, "test/event");
        assert_eq!(event.data_version, "1.0");
        assert!(event.event_time.is_none());
        assert!(event.topic.is_none());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_unset_transport_fields() {
        let event = GridEvent::with_id(
            "event-00000000000000000000",
            "Custom.TestEvent",
            "test/event",
            "1.0",
            json!({"message": "hello"}),
        );
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["id"], "event-00000000000000000000");
        assert_eq!(value["eventType"], "Custom.TestEvent");
        assert_eq!(value["dataVersion"], "1.0");
        assert_eq!(value["data"]["message"], "hello");
        assert!(value.get("eventTime").is_none());
        assert!(value.get("topic").is_none());
    }

    #[test]
    fn test_deserializes_delivered_envelope() {
        let delivered = json!({
            "id": "event-20240101000000000000",
            "eventType": "Custom.TestEvent",
            "subject": "test/event",
            "dataVersion": "1.0",
            "data": {"message": "hello"},
            "eventTime": "2024-01-01T00:00:01Z",
            "topic": "/topics/test-topic"
        });

        let event: GridEvent = serde_json::from_value(delivered).unwrap();
        assert!(event.event_time.is_some());
        assert_eq!(event.topic.as_deref(), Some("/topics/test-topic"));
    }

    #[test]
    fn test_deserializes_without_transport_fields() {
        let published = json!({
            "id": "event-20240101000000000000",
            "eventType": "Custom.TestEvent",
            "subject": "test/event",
            "dataVersion": "1.0",
            "data": {"message": "hello"}
        });

        let event: GridEvent = serde_json::from_value(published).unwrap();
        assert!(event.event_time.is_none());
        assert!(event.topic.is_none());
    }
}
