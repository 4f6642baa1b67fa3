//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the session store cannot be read.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of stored story sessions, when the store is readable.
    pub sessions: Option<usize>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let sessions = match state.session_repository.list_ids().await {
        Ok(ids) => Some(ids.len()),
        Err(e) => {
            warn!(error = %e, "session store unavailable during health check");
            None
        }
    };

    Json(HealthResponse {
        status: if sessions.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        sessions,
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
