use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::modules::todos::adapters::inbound::api_error::ApiError;
use crate::modules::todos::adapters::inbound::dto::CreateTodoBody;
use crate::modules::todos::core::todo::TodoItem;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let Json(body) = body?;
    let new_todo = body.validate()?;
    let item = state.todos.create(new_todo);
    Ok((StatusCode::CREATED, Json(item)))
}
