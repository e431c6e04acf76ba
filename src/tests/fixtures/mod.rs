// Shared helpers for adapter and end to end tests.

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;

use crate::modules::todos::core::todo::NewTodo;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::in_memory()
}

/// State holding one open item per title, with ids 1..=n.
pub fn make_seeded_state(titles: &[&str]) -> AppState {
    let state = make_test_state();
    for title in titles {
        state.todos.create(NewTodo {
            title: title.to_string(),
            description: None,
        });
    }
    state
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
