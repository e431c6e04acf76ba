use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::todos::adapters::inbound::dto::{CreateTodoBody, UpdateTodoBody};
use crate::modules::todos::core::todo::{TodoId, TodoItem};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Todo")]
pub struct GqlTodo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<TodoItem> for GqlTodo {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            completed: item.completed,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn todos(&self, context: &Context<'_>) -> Vec<GqlTodo> {
        let state = context.data_unchecked::<AppState>();
        state.todos.find_all().into_iter().map(Into::into).collect()
    }

    async fn todo(&self, context: &Context<'_>, id: TodoId) -> GqlResult<GqlTodo> {
        let state = context.data_unchecked::<AppState>();
        let item = state
            .todos
            .find_one(id)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(item.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_todo(
        &self,
        context: &Context<'_>,
        title: String,
        description: Option<String>,
    ) -> GqlResult<GqlTodo> {
        let state = context.data_unchecked::<AppState>();
        let new_todo = CreateTodoBody { title, description }
            .validate()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(state.todos.create(new_todo).into())
    }

    async fn update_todo(
        &self,
        context: &Context<'_>,
        id: TodoId,
        title: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> GqlResult<GqlTodo> {
        let state = context.data_unchecked::<AppState>();
        let patch = UpdateTodoBody {
            title,
            description,
            completed,
        }
        .validate()
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let item = state
            .todos
            .update(id, patch)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(item.into())
    }

    async fn delete_todo(&self, context: &Context<'_>, id: TodoId) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .todos
            .delete(id)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
