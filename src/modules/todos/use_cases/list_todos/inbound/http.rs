use axum::{Json, extract::State};

use crate::modules::todos::core::todo::TodoItem;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    Json(state.todos.find_all())
}
