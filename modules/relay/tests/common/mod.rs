use axum::body::Body;
use axum::Router;
use event_grid::{EventSink, RecordingSink};
use http_body_util::BodyExt;
use relay_rs::{router, AppState};
use std::sync::Arc;

pub const ENDPOINT: &str = "https://topic.example";

/// Build the relay router around a recording sink so tests can assert on
/// exactly what was published. `endpoint = None` models missing config.
#[allow(dead_code)]
pub fn app_with_sink(endpoint: Option<&str>) -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let state = AppState {
        topic_endpoint: endpoint.map(str::to_string),
        sink: sink.clone() as Arc<dyn EventSink>,
    };
    (router(state), sink)
}

/// Build the relay router around a sink armed to fail every send.
#[allow(dead_code)]
pub fn failing_app(message: &str) -> Router {
    let sink: Arc<dyn EventSink> = Arc::new(RecordingSink::failing(message));
    router(AppState {
        topic_endpoint: Some(ENDPOINT.to_string()),
        sink,
    })
}

/// Read response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read response body as text.
#[allow(dead_code)]
pub async fn body_text(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
