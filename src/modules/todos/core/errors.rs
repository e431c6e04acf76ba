use thiserror::Error;

use crate::modules::todos::core::todo::TodoId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo with ID {id} not found")]
    NotFound { id: TodoId },
}
