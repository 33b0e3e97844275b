//! REST API
//!
//! Routes:
//! - GET /api/health - Liveness and backend label
//! - /api/projects - see [`projects`]
//! - /api/folders - see [`folders`]

pub mod folders;
pub mod projects;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::APP_VERSION;
use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .nest("/projects", projects::routes())
        .nest("/folders", folders::routes());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving
    pub status: &'static str,
    /// Storage backend name, `memory` or `postgres`
    pub backend: &'static str,
    /// Crate version
    pub version: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.storage().name(),
        version: APP_VERSION,
    })
}
