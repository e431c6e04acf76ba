use crate::modules::todos::adapters::outbound::todo_store_in_memory::InMemoryTodoStore;
use crate::modules::todos::core::ports::TodoRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTodoStore::new()))
    }
}
