use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::modules::todos::adapters::inbound::api_error::ApiError;
use crate::modules::todos::adapters::inbound::dto::UpdateTodoBody;
use crate::modules::todos::core::todo::{TodoId, TodoItem};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch = body.validate()?;
    Ok(Json(state.todos.update(id, patch)?))
}
