// Transport shapes accepted by the inbound adapters, and their validation.
//
// Unknown properties (an `id` in an update body included) are rejected while
// deserializing; the remaining rules are checked by `validate`.

use serde::Deserialize;
use thiserror::Error;

use crate::modules::todos::core::todo::{NewTodo, TodoPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title should not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

fn check_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

impl CreateTodoBody {
    pub fn validate(self) -> Result<NewTodo, ValidationError> {
        check_title(&self.title)?;
        Ok(NewTodo {
            title: self.title,
            description: self.description,
        })
    }
}

impl UpdateTodoBody {
    pub fn validate(self) -> Result<TodoPatch, ValidationError> {
        if let Some(title) = &self.title {
            check_title(title)?;
        }
        Ok(TodoPatch {
            title: self.title,
            description: self.description,
            completed: self.completed,
        })
    }
}
