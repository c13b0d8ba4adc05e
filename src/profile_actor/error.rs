//! Error types for the Profile actor.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during profile operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// No order in the ledger has the given id.
    #[error("Order not found")]
    OrderNotFound,

    /// The delivery address trimmed to an empty string.
    #[error("Delivery address cannot be empty")]
    EmptyAddress,

    /// The restaurant name trimmed to an empty string.
    #[error("Restaurant name cannot be empty")]
    EmptyName,

    /// The restaurant is already in the favorites list.
    #[error("Restaurant is already a favorite")]
    DuplicateFavorite,

    /// The restaurant is not in the favorites list.
    #[error("Restaurant is not a favorite")]
    NotAFavorite,

    /// The review carried no order id.
    #[error("Order ID is required")]
    MissingOrderId,

    /// Ratings are integers from 1 to 5.
    #[error("Rating must be an integer between 1 and 5")]
    InvalidRating(i32),

    /// The review text trimmed to an empty string.
    #[error("Review text cannot be empty")]
    EmptyReviewText,

    /// Reviews may only be attached to delivered orders.
    #[error("Only delivered orders can be reviewed")]
    OrderNotDelivered,

    /// The requested profile aggregate was not found.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The profile store rejected a load or save.
    #[error("Profile store error: {0}")]
    Store(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for ProfileError {
    fn from(err: StoreError) -> Self {
        ProfileError::Store(err.to_string())
    }
}
