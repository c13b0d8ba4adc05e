//! # Aggregate Trait
//!
//! The contract a resource type (Cart, Profile, …) must satisfy to be managed
//! by the generic [`AggregateActor`](crate::framework::AggregateActor).
//!
//! By pinning the full vocabulary of an aggregate (its id, its create and
//! update payloads, its command enum and command results) in associated
//! types, the actor loop is written once and reused for every aggregate,
//! while the compiler guarantees that a cart command can never be sent to a
//! profile actor.
//!
//! # Provided Methods (Hooks)
//!
//! [`Aggregate::on_create`] has a default no-op implementation. Override it
//! when creation has side effects; the profile aggregate uses it to hydrate
//! itself from the profile store before the first request is served.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for a resource managed by an [`AggregateActor`](crate::framework::AggregateActor).
///
/// # Async & Context
/// The hooks are `#[async_trait]` so an aggregate may await external
/// collaborators (the profile aggregate awaits its store on every mutation).
/// `Context` is injected into every hook when the actor task starts, not when
/// the actor is constructed. This late binding keeps wiring order flexible:
/// actors are created first, dependencies handed over at `run()`.
#[async_trait]
pub trait Aggregate: Clone + Send + Sync + 'static {
    /// Unique identifier for this aggregate.
    /// Must be convertible from `u32` for automatic id generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating intrinsic fields of an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum of domain operations beyond create/get/update
    /// (e.g. `AddItem`, `AddOrderReview`).
    type Command: Send + Sync + Debug;

    /// Result type returned by commands. Usually an enum whose variants
    /// mirror `Command` one to one.
    type CommandResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` when the
    /// aggregate has none.
    type Context: Send + Sync;

    /// The domain error for this aggregate. One enum per aggregate: every
    /// operation returns the same error type, so callers match on a single
    /// set of variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the aggregate from a freshly generated id and the create
    /// payload. Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle hooks (async) ---

    /// Called right after construction, before the aggregate is stored.
    /// Errors abort the creation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to intrinsic state.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Command handler (async) ---

    /// Execute a domain command against the current state.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        _ctx: &Self::Context,
    ) -> Result<Self::CommandResult, Self::Error>;
}
