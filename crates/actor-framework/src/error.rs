//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Failures produced by an entity's hooks travel
//! inside [`FrameworkError::EntityError`] and can be recovered with their concrete type through
//! [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is a transport failure or when the boxed
    /// error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of stock: {0}")]
    struct StockError(u32);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct OtherError;

    #[test]
    fn test_downcast_entity_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(StockError(3)));
        assert_eq!(err.downcast_entity::<StockError>().unwrap(), StockError(3));
    }

    #[test]
    fn test_downcast_entity_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(OtherError));
        let back = err.downcast_entity::<StockError>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));

        let closed = FrameworkError::ActorClosed.downcast_entity::<StockError>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
