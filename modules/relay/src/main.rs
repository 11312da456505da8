use event_grid::{EnvCredential, EventSink, HttpSink};
use relay_rs::config::Config;
use relay_rs::{router, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = Config::from_env()?;
    tracing::info!("config loaded");

    if cfg.topic_endpoint.is_none() {
        // Matches the per-request contract: boot anyway, reject publishes.
        tracing::warn!("EVENT_GRID_TOPIC_ENDPOINT not set; publish requests will be rejected");
    }

    let credential = Arc::new(EnvCredential::new());
    let sink: Arc<dyn EventSink> = Arc::new(HttpSink::new(credential)?);

    let app = router(AppState {
        topic_endpoint: cfg.topic_endpoint,
        sink,
    });

    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "relay module listening");
    axum::serve(listener, app).await?;

    Ok(())
}
