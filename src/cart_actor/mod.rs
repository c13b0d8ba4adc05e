//! The Cart actor: a session-scoped aggregate for building up an order.
//!
//! Carts are cheap and ephemeral. The orchestration layer creates one per
//! ordering session, drives it through [`CartCommand`]s, and clears it once
//! the order is confirmed. Pricing rules (tax, delivery fee, rounding) live
//! on the model type; this module only binds [`Cart`] to the actor runtime.
//!
//! - [`entity`] - [`Aggregate`](crate::framework::Aggregate) implementation for [`Cart`]
//! - [`commands`] - [`CartCommand`] and [`CartCommandResult`]
//! - [`error`] - [`CartError`] for type-safe failures
//! - [`new()`] - Factory that creates the actor and its generic client

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::framework::{AggregateActor, AggregateClient};
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new() -> (AggregateActor<Cart>, AggregateClient<Cart>) {
    AggregateActor::new(32)
}
