//! Error types for the Order actor.

use crate::model::OrderStatus;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// All of them are recoverable by the caller: correct the input, or re-read the order and
/// decide again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Empty cart, blank table, or an item that can no longer be ordered.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order has no successor status.
    #[error("Order is already {status}; no further status")]
    InvalidTransition { status: OrderStatus },

    /// Someone else moved the order first.
    #[error("Order changed concurrently: expected {expected}, found {actual}")]
    ConcurrentModification {
        expected: OrderStatus,
        actual: OrderStatus,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(order_error) => order_error,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
