use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::todos::adapters::inbound::api_error::ApiError;
use crate::modules::todos::core::todo::{TodoId, TodoItem};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.todos.find_one(id)?))
}
