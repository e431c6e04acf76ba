use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Lookups accept any integer, only
/// positive values are ever handed out.
pub type TodoId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

/// Input for creating a todo.
///
/// Precondition: `title` is non-empty once trimmed. The inbound adapters
/// enforce this before a `NewTodo` reaches the store; the store does not
/// check it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
}

impl NewTodo {
    pub fn into_item(self, id: TodoId) -> TodoItem {
        TodoItem {
            id,
            title: self.title,
            description: self.description,
            completed: false,
        }
    }
}

/// Partial update. Only the fields that are `Some` are written; the id of
/// the target item is not part of the patch and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    pub fn apply_to(self, item: &mut TodoItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}
