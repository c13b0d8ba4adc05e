//! Errors raised by the actor plumbing itself, as opposed to domain errors
//! raised inside an aggregate.

/// Errors that can occur between a client and its actor.
///
/// `Aggregate` wraps a domain error that crossed the channel boxed; its
/// `Display` passes the domain message through verbatim so user-facing text
/// survives the hop. Domain clients downcast it back to the concrete enum
/// (see [`ActorClient::map_error`](crate::clients::ActorClient::map_error)
/// implementations).
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No aggregate with id {0}")]
    NotFound(String),
    #[error("{0}")]
    Aggregate(Box<dyn std::error::Error + Send + Sync>),
}
