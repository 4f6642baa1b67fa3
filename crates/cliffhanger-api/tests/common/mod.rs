//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cliffhanger_core::clock::Clock;
use cliffhanger_core::repository::SessionRepository;
use cliffhanger_core::rng::DeterministicRng;
use cliffhanger_session_store::memory_session_repository::InMemorySessionRepository;
use cliffhanger_story::domain::config::StoryConfig;
use cliffhanger_test_support::{FixedClock, MockRng};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cliffhanger_api::build_router;
use cliffhanger_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over `repository` with a deterministic clock
/// and a `MockRng`, which always picks the first table entry.
pub fn build_test_app(repository: Arc<InMemorySessionRepository>) -> Router {
    build_test_app_with_rng(repository, MockRng)
}

/// Build the full app router with a custom random source.
pub fn build_test_app_with_rng(
    repository: Arc<InMemorySessionRepository>,
    rng: impl DeterministicRng + Send + 'static,
) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let session_repository: Arc<dyn SessionRepository> = repository;
    let app_state = AppState::new(
        fixed_clock(),
        rng,
        session_repository,
        StoryConfig::default(),
    );
    build_router(app_state)
}

/// A fresh, empty session store shared by the requests of one test.
pub fn new_store() -> Arc<InMemorySessionRepository> {
    Arc::new(InMemorySessionRepository::new())
}

/// A complete cast for start requests.
pub fn full_cast() -> serde_json::Value {
    serde_json::json!({
        "main": "Riley",
        "friend1": "Sam",
        "friend2": "Jo",
        "friend3": "Alex",
        "friend4": "Kim"
    })
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
