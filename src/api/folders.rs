//! Folders Routes
//!
//! Routes:
//! - GET /folders - List all folders
//! - POST /folders - Create a folder
//! - GET /folders/:id - Get one folder
//! - PATCH /folders/:id - Rename and/or reparent
//! - DELETE /folders/:id - Delete (idempotent)

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use sprout_store::{Folder, FolderPatch, NewFolder};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Build folder routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_folders).post(create_folder))
        .route(
            "/:id",
            get(get_folder).patch(update_folder).delete(delete_folder),
        )
}

async fn list_folders(State(state): State<AppState>) -> ApiResult<Json<Vec<Folder>>> {
    let folders = state.storage().get_all_folders().await?;
    Ok(Json(folders))
}

async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Folder>> {
    state
        .storage()
        .get_folder(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("folder not found: {id}")))
}

async fn create_folder(
    State(state): State<AppState>,
    payload: Result<Json<NewFolder>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Folder>)> {
    let Json(input) = payload?;
    input.validate()?;

    let folder = state.storage().create_folder(input).await?;
    info!(id = %folder.id, "folder created via api");

    Ok((StatusCode::CREATED, Json(folder)))
}

async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FolderPatch>, JsonRejection>,
) -> ApiResult<Json<Folder>> {
    let Json(patch) = payload?;
    patch.validate()?;

    let folder = state.storage().update_folder(&id, patch).await?;
    Ok(Json(folder))
}

async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.storage().delete_folder(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
