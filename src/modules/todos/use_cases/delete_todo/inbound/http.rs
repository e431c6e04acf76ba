use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::modules::todos::adapters::inbound::api_error::ApiError;
use crate::modules::todos::core::todo::TodoId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.todos.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
