//! Error types for the Menu actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Blank name, zero price or an otherwise malformed edit.
    #[error("Menu validation error: {0}")]
    Validation(String),

    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<MenuError>() {
            Ok(menu_error) => menu_error,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
