//! Integration tests for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app(common::new_store());

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions"], 0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_counts_started_sessions() {
    let store = common::new_store();
    let body = serde_json::json!({ "characters": common::full_cast(), "setting": "heist_crew" });
    let (status, _) =
        common::post_json(common::build_test_app(store.clone()), "/api/story/start", &body).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = common::get_json(common::build_test_app(store), "/health").await;

    assert_eq!(json["sessions"], 1);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app(common::new_store());

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/story/nonexistent")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
