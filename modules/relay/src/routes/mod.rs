pub mod events;
pub mod health;
pub mod publish;

use axum::routing::{get, post};
use axum::Router;
use event_grid::EventSink;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state: a config snapshot plus the publish sink.
/// Read-only after startup; no locking needed.
#[derive(Clone)]
pub struct AppState {
    pub topic_endpoint: Option<String>,
    pub sink: Arc<dyn EventSink>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/publish",
            get(publish::publish_event).post(publish::publish_event),
        )
        .route("/api/events", post(events::consume_event))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
