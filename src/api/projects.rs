//! Projects Routes
//!
//! Routes:
//! - GET /projects - List all projects
//! - POST /projects - Create a new project
//! - GET /projects/:id - Get one project
//!
//! Projects cannot be updated or deleted.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use sprout_store::{NewProject, Project};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Build project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:id", get(get_project))
}

async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.storage().get_all_projects().await?;
    Ok(Json(projects))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    state
        .storage()
        .get_project(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("project not found: {id}")))
}

async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let Json(input) = payload?;
    input.validate()?;

    let project = state.storage().create_project(input).await?;
    info!(id = %project.id, "project created via api");

    Ok((StatusCode::CREATED, Json(project)))
}
