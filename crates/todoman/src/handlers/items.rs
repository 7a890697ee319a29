use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use todoman_core::todo::CreateTodoItemRequest;

use crate::state::AppState;

use super::{ensure_list_exists, error::AppError};

/// Add an item to a list (POST /lists/{list_id}/items).
pub async fn add_item(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(payload): Json<CreateTodoItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_list_exists(&state, list_id).await?;
    payload.validate()?;

    let item = state.store.add_item(list_id, &payload.description).await?;

    tracing::info!(list_id, item_id = item.id, "Added item to list");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove an item from a list (DELETE /lists/{list_id}/items/{item_id}).
///
/// Removing an item that does not exist is a no-op, not an error.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_list_exists(&state, list_id).await?;

    state.store.remove_item(list_id, item_id).await?;

    tracing::info!(list_id, item_id, "Removed item from list");

    Ok(StatusCode::NO_CONTENT)
}
