use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use event_grid::{GridEvent, GridResult};
use serde_json::{json, Value};

use crate::models::{PublishAccepted, PublishFailed};
use crate::routes::AppState;

/// Producer-fixed envelope constants for this system
pub const EVENT_TYPE: &str = "Custom.TestEvent";
pub const SUBJECT: &str = "test/event";
pub const DATA_VERSION: &str = "1.0";

/// Payload substituted when the request body carries no usable message
pub const DEFAULT_MESSAGE: &str = "Test event from Azure Function";

/// Fixed origin tag stamped into every published payload
pub const SOURCE_TAG: &str = "relay-via-private-endpoint";

const MISSING_ENDPOINT: &str = "EVENT_GRID_TOPIC_ENDPOINT not configured";

/// Publish route: wrap the request in an envelope and forward it to the topic.
///
/// Anonymous by design; authorization, if any, is enforced upstream. Every
/// failure past the config check maps to a 500 JSON error body. No retry: a
/// retried call produces a fresh envelope with a fresh id.
pub async fn publish_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    log_forwarding_headers(&headers);

    let Some(endpoint) = state.topic_endpoint.clone() else {
        // Short-circuit before any sink call. Plain text, matching the
        // contract for the missing-config case.
        return (StatusCode::INTERNAL_SERVER_ERROR, MISSING_ENDPOINT).into_response();
    };

    match publish_to_topic(&state, &endpoint, &body).await {
        Ok(event_id) => {
            tracing::info!(%event_id, %endpoint, "event published");

            (
                StatusCode::OK,
                Json(PublishAccepted {
                    status: "success",
                    message: format!("Event {event_id} published successfully"),
                    endpoint,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to publish event");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PublishFailed {
                    status: "error",
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// The single fallible span of the publish route: credential resolution,
/// envelope construction, and the one sink call.
async fn publish_to_topic(state: &AppState, endpoint: &str, body: &[u8]) -> GridResult<String> {
    let event = GridEvent::new(
        EVENT_TYPE,
        SUBJECT,
        DATA_VERSION,
        json!({
            "message": message_from_body(body),
            "timestamp": Utc::now().to_rfc3339(),
            "source": SOURCE_TAG,
        }),
    );

    let event_id = event.id.clone();
    state.sink.send(endpoint, &event).await?;
    Ok(event_id)
}

/// A body that is not JSON, or carries no string `message`, is not a caller
/// error; the canned test payload is substituted instead.
fn message_from_body(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}

/// Diagnostic headers from the fronting proxy. Logged only, never validated.
fn log_forwarding_headers(headers: &HeaderMap) {
    let client_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .unwrap_or("unknown");
    let original_host = headers
        .get("x-original-host")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let arr_ssl = headers
        .get("x-arr-ssl")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info!(%client_ip, %original_host, %arr_ssl, "processing publish request");
}
