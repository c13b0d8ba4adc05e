//! # ActorClient Trait
//!
//! Common surface for aggregate-specific clients: access to the generic
//! [`AggregateClient`] plus one error-mapping rule per client, with a default
//! `get` built on top.

use crate::framework::{ActorError, Aggregate, AggregateClient};
use async_trait::async_trait;

/// Trait for aggregate-specific clients to inherit standard operations.
///
/// Implementors supply [`inner`](ActorClient::inner) and
/// [`map_error`](ActorClient::map_error); `map_error` is where a boxed domain
/// error that crossed the channel gets downcast back to the concrete enum, so
/// callers can match on `CartError::InvalidQuantity` rather than on message
/// strings.
#[async_trait]
pub trait ActorClient<T: Aggregate>: Send + Sync {
    /// The aggregate-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &AggregateClient<T>;

    /// Map actor plumbing errors to the aggregate-specific error type.
    fn map_error(e: ActorError) -> Self::Error;

    /// Fetch an aggregate snapshot by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
