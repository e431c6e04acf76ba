// In memory implementation of the TodoRepository port.
//
// Responsibilities
// - Keep todo items in insertion order together with the id sequence.
// - Serialize mutations behind a single write lock; reads copy out a snapshot.

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::ports::TodoRepository;
use crate::modules::todos::core::todo::{NewTodo, TodoId, TodoItem, TodoPatch};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct TodoCollection {
    items: Vec<TodoItem>,
    // Every stored id is strictly below this value; deleted ids are never handed out again.
    next_id: TodoId,
}

impl Default for TodoCollection {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoCollection {
    fn position(&self, id: TodoId) -> Result<usize, TodoError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::NotFound { id })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    inner: RwLock<TodoCollection>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation completes in one step under the write lock, so a poisoned
    // lock still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, TodoCollection> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TodoCollection> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TodoRepository for InMemoryTodoStore {
    fn create(&self, input: NewTodo) -> TodoItem {
        let mut guard = self.write();
        let id = guard.next_id;
        guard.next_id += 1;
        let item = input.into_item(id);
        guard.items.push(item.clone());
        tracing::debug!(id, "todo created");
        item
    }

    fn find_all(&self) -> Vec<TodoItem> {
        self.read().items.clone()
    }

    fn find_one(&self, id: TodoId) -> Result<TodoItem, TodoError> {
        let guard = self.read();
        let index = guard.position(id)?;
        Ok(guard.items[index].clone())
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> Result<TodoItem, TodoError> {
        let mut guard = self.write();
        let index = guard.position(id)?;
        let item = &mut guard.items[index];
        patch.apply_to(item);
        tracing::debug!(id, "todo updated");
        Ok(item.clone())
    }

    fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let mut guard = self.write();
        let index = guard.position(id)?;
        guard.items.remove(index);
        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}
