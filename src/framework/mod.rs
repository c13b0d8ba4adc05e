//! Generic aggregate-actor engine.
//!
//! Every stateful resource in the ordering system (a checkout cart, a user
//! profile) is an [`Aggregate`] owned by an [`AggregateActor`]. The actor runs
//! in its own Tokio task and processes requests strictly sequentially, which
//! gives each aggregate a single-writer discipline without any locking. A
//! multi-step read-modify-write such as appending an order to a profile is
//! one message, so it can never interleave with another mutation of the same
//! profile.
//!
//! # Main Components
//!
//! - [`Aggregate`] - Contract a resource type implements to be actor-managed
//! - [`AggregateActor`] - Generic actor owning the state and the request loop
//! - [`AggregateClient`] - Cloneable async handle for sending requests
//! - [`ActorError`] - Plumbing errors (closed channels, unknown ids)
//!
//! # Testing
//!
//! See the [`mock`] module for testing client-side logic without spawning
//! actors.

pub mod actor;
pub mod aggregate;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::AggregateActor;
pub use aggregate::Aggregate;
pub use client::AggregateClient;
pub use error::ActorError;
pub use message::{AggregateRequest, Response};
