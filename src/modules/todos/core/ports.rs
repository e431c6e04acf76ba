// Ports define what the inbound adapters need from a todo store, without implementing it.
//
// Boundaries
// - No storage here. `InMemoryTodoStore` in the outbound adapters implements the trait.
// - Calls are synchronous and bounded; there are no suspension points inside a store.

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::todo::{NewTodo, TodoId, TodoItem, TodoPatch};

pub trait TodoRepository: Send + Sync {
    /// Assigns the next id and appends an open item. See `NewTodo` for the
    /// title precondition.
    fn create(&self, input: NewTodo) -> TodoItem;

    /// Snapshot of every item in insertion order.
    fn find_all(&self) -> Vec<TodoItem>;

    fn find_one(&self, id: TodoId) -> Result<TodoItem, TodoError>;

    /// Merges `patch` onto the item and returns the result. Nothing changes
    /// when the id is unknown.
    fn update(&self, id: TodoId, patch: TodoPatch) -> Result<TodoItem, TodoError>;

    fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}
