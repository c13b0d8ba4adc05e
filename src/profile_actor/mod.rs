//! The Profile actor: the per-user order ledger, favorites, and reviews.
//!
//! One profile aggregate per user, hydrated from the [`ProfileStore`] on
//! creation and mirrored back in full after every mutation (write-through).
//! Because the actor processes requests sequentially, all read-modify-write
//! sequences on a user's ledger are race-free without explicit locking.
//!
//! - [`entity`] - [`Aggregate`](crate::framework::Aggregate) implementation for [`Profile`]
//! - [`commands`] - [`ProfileCommand`] and [`ProfileCommandResult`]
//! - [`error`] - [`ProfileError`] for type-safe failures
//! - [`new()`] - Factory that creates the actor and its generic client
//!
//! [`ProfileStore`]: crate::store::ProfileStore

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::framework::{AggregateActor, AggregateClient};
use crate::model::Profile;

/// Creates a new Profile actor and its client.
pub fn new() -> (AggregateActor<Profile>, AggregateClient<Profile>) {
    AggregateActor::new(32)
}
