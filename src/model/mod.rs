//! Domain data types and their pure projections.
//!
//! Everything here is plain state: no channels, no I/O. Mutation with
//! validation lives in the aggregate implementations
//! ([`cart_actor`](crate::cart_actor), [`profile_actor`](crate::profile_actor));
//! the read-only calculations (pricing, history sorting, filtering) live on
//! the types themselves so they can be tested without a runtime.

pub mod cart;
pub mod order;
pub mod profile;

pub use cart::*;
pub use order::*;
pub use profile::*;
