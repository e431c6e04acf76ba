// End to end tests over the full router with an in memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::{NewTodo, TodoPatch};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{body_json, empty_request, json_request, make_test_state};

#[fixture]
fn state() -> AppState {
    make_test_state()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_run_the_crud_flow(state: AppState) {
    let app = router(state);

    let response = send(&app, empty_request("GET", "/todos")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let response = send(
        &app,
        json_request("POST", "/todos", r#"{"title":"Task","description":"desc"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 1, "title": "Task", "description": "desc", "completed": false})
    );

    let response = send(&app, empty_request("GET", "/todos")).await;
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{"id": 1, "title": "Task", "description": "desc", "completed": false}])
    );

    let response = send(
        &app,
        json_request("PUT", "/todos/1", r#"{"title":"Task updated","completed":true}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"id": 1, "title": "Task updated", "description": "desc", "completed": true})
    );

    let response = send(&app, empty_request("DELETE", "/todos/1")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, empty_request("GET", "/todos/1")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "statusCode": 404,
            "message": "Todo with ID 1 not found",
            "error": "Not Found"
        })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_empty_title(state: AppState) {
    let app = router(state.clone());
    let response = send(&app, json_request("POST", "/todos", r#"{"title":""}"#)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.todos.find_all().is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_report_not_found_alike_for_get_update_and_delete(state: AppState) {
    let app = router(state.clone());
    state.todos.create(NewTodo {
        title: "keep".to_string(),
        description: None,
    });

    for request in [
        empty_request("GET", "/todos/7"),
        json_request("PUT", "/todos/7", r#"{"completed":true}"#),
        empty_request("DELETE", "/todos/7"),
    ] {
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["message"],
            "Todo with ID 7 not found"
        );
    }

    assert_eq!(state.todos.find_one(7), Err(TodoError::NotFound { id: 7 }));
    let ids: Vec<_> = state.todos.find_all().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[rstest]
fn it_should_keep_ids_increasing_across_deletes(state: AppState) {
    let mut previous = 0;
    for round in 0..5 {
        let created = state.todos.create(NewTodo {
            title: format!("round {round}"),
            description: None,
        });
        assert!(created.id > previous);
        previous = created.id;
        if round % 2 == 0 {
            state.todos.delete(created.id).unwrap();
        }
    }

    let ids: Vec<_> = state.todos.find_all().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[rstest]
fn it_should_round_trip_and_keep_untouched_fields(state: AppState) {
    let created = state.todos.create(NewTodo {
        title: "Task".to_string(),
        description: Some("desc".to_string()),
    });
    assert_eq!(state.todos.find_one(created.id), Ok(created.clone()));

    let updated = state
        .todos
        .update(
            created.id,
            TodoPatch {
                completed: Some(true),
                ..TodoPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert!(updated.completed);
}
