//! Error types for order placement.

use crate::cart_actor::CartError;
use crate::profile_actor::ProfileError;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// The named item is not on the menu right now.
    #[error("{0} is not available")]
    ItemUnavailable(String),

    /// The payment was declined. Nothing was recorded or cleared.
    #[error("Payment failed")]
    PaymentFailed,

    /// A cart operation failed underneath the orchestrator.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A profile operation failed underneath the orchestrator.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}
