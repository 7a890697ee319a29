use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use todoman_core::todo::CreateTodoListRequest;

use crate::state::AppState;

use super::{ensure_list_exists, error::AppError};

/// List all TODO lists, without their items (GET /lists).
pub async fn list_lists(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lists = state.store.all_lists().await?;
    Ok(Json(lists))
}

/// Create a new TODO list (POST /lists).
pub async fn create_list(
    State(state): State<AppState>,
    Json(payload): Json<CreateTodoListRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let list = state.store.create_list(&payload.title).await?;

    tracing::info!(list_id = list.id, title = %list.title, "Created new list");

    Ok((StatusCode::CREATED, Json(list)))
}

/// Get a single list with its items (GET /lists/{list_id}).
pub async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_list_exists(&state, list_id).await?;

    let list = state.store.list_with_items(list_id).await?;
    Ok(Json(list))
}

/// Rename a list by ID (PUT /lists/{list_id}).
///
/// Items are untouched; only the title record is overwritten.
pub async fn update_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(payload): Json<CreateTodoListRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_list_exists(&state, list_id).await?;
    payload.validate()?;

    state.store.update_list(&payload.into_list(list_id)).await?;

    tracing::info!(list_id, "Updated list");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a list by ID (DELETE /lists/{list_id}).
///
/// Also deletes all items belonging to this list and its item-id counter.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ensure_list_exists(&state, list_id).await?;

    state.store.delete_list(list_id).await?;

    tracing::info!(list_id, "Deleted list and its items");

    Ok(StatusCode::NO_CONTENT)
}
