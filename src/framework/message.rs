//! Request and response types exchanged between [`AggregateClient`](crate::framework::AggregateClient)
//! and [`AggregateActor`](crate::framework::AggregateActor).

use crate::framework::aggregate::Aggregate;
use crate::framework::error::ActorError;
use tokio::sync::oneshot;

/// One-shot reply channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, ActorError>>;

/// A request sent to an aggregate actor.
///
/// The lifecycle operations (`Create`, `Get`, `Update`) are uniform across
/// aggregates; everything domain-specific travels as a `Command`. The
/// associated types of [`Aggregate`] keep the payloads honest: a
/// `CartCommand` cannot be packed into a request for the profile actor.
///
/// There is no `Delete` variant: nothing in this system destroys an
/// aggregate. Carts are cleared, order records are append-only.
#[derive(Debug)]
pub enum AggregateRequest<T: Aggregate> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Command {
        id: T::Id,
        command: T::Command,
        respond_to: Response<T::CommandResult>,
    },
}
