mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_module_and_version() {
    let (app, _sink) = common::app_with_sink(Some(common::ENDPOINT));

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["module"], "relay");
    assert!(json["version"].is_string());
}
