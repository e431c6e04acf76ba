use axum::{Extension, Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::todos::use_cases::create_todo::inbound::http as create_http;
use crate::modules::todos::use_cases::delete_todo::inbound::http as delete_http;
use crate::modules::todos::use_cases::get_todo::inbound::http as get_http;
use crate::modules::todos::use_cases::list_todos::inbound::http as list_http;
use crate::modules::todos::use_cases::update_todo::inbound::http as update_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    Router::new()
        .route("/todos", get(list_http::handle).post(create_http::handle))
        .route(
            "/todos/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
}

/// Router with request tracing, plus a permissive CORS policy for clients
/// that call the API straight from a device or browser.
pub fn app(state: AppState, cors_permissive: bool) -> Router {
    let router = router(state).layer(TraceLayer::new_for_http());
    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
