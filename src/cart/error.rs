//! Error types for cart edits.

use crate::model::MenuItemId;
use thiserror::Error;

/// Errors returned by [`Cart`](crate::cart::Cart) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The item cannot go into this cart, or the quantity is out of range.
    #[error("Cart validation error: {0}")]
    Validation(String),

    /// Quantity change on an item that is not in the cart.
    #[error("Item not in cart: {0}")]
    NotFound(MenuItemId),
}
