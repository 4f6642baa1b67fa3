//! Cliffhanger story service — HTTP API.
//!
//! Exposes the router, shared state and configuration so the binary and the
//! integration tests build the exact same application.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with the web client's origin once it has a fixed deployment URL.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/story", routes::story::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
