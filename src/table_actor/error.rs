//! Error types for the Table actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during table registration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// Blank label, or a label the restaurant already uses.
    #[error("Table validation error: {0}")]
    Validation(String),

    #[error("Table not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for TableError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<TableError>() {
            Ok(table_error) => table_error,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}
