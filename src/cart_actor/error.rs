//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The quantity passed to an add must be strictly positive.
    #[error("Quantity must be greater than 0")]
    InvalidQuantity(i32),

    /// The named item is not a line in the cart.
    #[error("{0} not found in cart")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
