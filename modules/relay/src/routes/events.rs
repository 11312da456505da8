use axum::http::StatusCode;
use axum::Json;
use event_grid::GridEvent;
use serde_json::{json, Value};

/// Push-delivery route for the topic subscription.
///
/// The `Json` extractor rejects a malformed envelope before this body runs,
/// mirroring a binding-level delivery failure. A 200 acknowledges delivery;
/// retry and ordering are the transport's policies, and no deduplication
/// happens here.
pub async fn consume_event(Json(event): Json<GridEvent>) -> StatusCode {
    let record = envelope_record(&event);

    tracing::info!(
        event_id = %event.id,
        event_type = %event.event_type,
        subject = %event.subject,
        "received event from topic"
    );
    tracing::info!(record = %record, "event envelope");

    StatusCode::OK
}

/// Flatten an envelope into the diagnostic record that gets logged.
/// A missing `event_time` becomes JSON null, never an error.
fn envelope_record(event: &GridEvent) -> Value {
    json!({
        "id": event.id,
        "event_type": event.event_type,
        "subject": event.subject,
        "event_time": event.event_time.map(|t| t.to_rfc3339()),
        "data": event.data,
        "topic": event.topic,
    })
}
