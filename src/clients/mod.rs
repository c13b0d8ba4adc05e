//! Type-safe wrappers around [`AggregateClient`](crate::framework::AggregateClient).

pub mod actor_client;
pub mod cart_client;
pub mod profile_client;

pub use actor_client::*;
pub use cart_client::*;
pub use profile_client::*;
