//! # Generic Actor Server
//!
//! [`AggregateActor`] is the server half of the engine. It owns the in-memory
//! store for one aggregate type and processes every [`AggregateRequest`]
//! sequentially, so the state needs no `Mutex`: exclusive access falls out of
//! exclusive ownership within the task.
//!
//! # Usage Pattern
//!
//! 1. **Create**: `AggregateActor::new(buffer)` yields the actor and its
//!    [`AggregateClient`].
//! 2. **Wire**: hand the aggregate's dependencies to `actor.run(context)`.
//! 3. **Run**: spawn the run loop on a Tokio task.
//!
//! ```rust,ignore
//! let (actor, client) = AggregateActor::<Profile>::new(32);
//! tokio::spawn(actor.run(store));
//! let id = client.create(ProfileCreate { user_id }).await?;
//! ```
//!
//! # Operations
//!
//! * **Create**: generate the next id, build the aggregate via
//!   `from_create_params`, run the `on_create` hook, store it, reply with the
//!   id. A hook error aborts the creation and nothing is stored.
//! * **Get**: reply with a clone of the aggregate, or `None`.
//! * **Update**: run `on_update` against the stored aggregate, reply with the
//!   updated state.
//! * **Command**: run `handle_command` against the stored aggregate, reply
//!   with its result.

use crate::framework::aggregate::Aggregate;
use crate::framework::client::AggregateClient;
use crate::framework::error::ActorError;
use crate::framework::message::AggregateRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of aggregates.
///
/// Ids are handed out from an internal `u32` counter; aggregates whose
/// identity lives elsewhere (a profile is keyed by user id in the store)
/// carry that identity inside their own state.
pub struct AggregateActor<T: Aggregate> {
    receiver: mpsc::Receiver<AggregateRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: Aggregate> AggregateActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the mpsc channel capacity; senders wait when it is
    /// full.
    pub fn new(buffer_size: usize) -> (Self, AggregateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = AggregateClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is injected into every hook. Dependencies created after the
    /// actor but before the loop (other clients, the profile store) arrive
    /// here.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "Cart" instead of "mealdrop::model::cart::Cart"
        let aggregate = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(aggregate, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                AggregateRequest::Create { params, respond_to } => {
                    debug!(aggregate, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(aggregate, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(ActorError::Aggregate(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(aggregate, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(aggregate, error = %e, "Create failed");
                            let _ = respond_to.send(Err(ActorError::Aggregate(Box::new(e))));
                        }
                    }
                }
                AggregateRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(aggregate, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                AggregateRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(aggregate, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(aggregate, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(ActorError::Aggregate(Box::new(e))));
                            continue;
                        }
                        info!(aggregate, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(aggregate, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
                AggregateRequest::Command {
                    id,
                    command,
                    respond_to,
                } => {
                    debug!(aggregate, %id, ?command, "Command");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_command(command, &context)
                            .await
                            .map_err(|e| ActorError::Aggregate(Box::new(e)));
                        match &result {
                            Ok(_) => info!(aggregate, %id, "Command ok"),
                            Err(e) => warn!(aggregate, %id, error = %e, "Command failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(aggregate, %id, "Not found");
                        let _ = respond_to.send(Err(ActorError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(aggregate, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // A minimal aggregate exercising every code path of the loop.

    #[derive(Clone, Debug, PartialEq)]
    struct GiftCard {
        id: u32,
        balance: i64,
    }

    #[derive(Debug)]
    struct GiftCardCreate {
        balance: i64,
    }

    #[derive(Debug)]
    struct GiftCardTopUp {
        amount: Option<i64>,
    }

    #[derive(Debug)]
    enum GiftCardCommand {
        Redeem(i64),
        Balance,
    }

    #[derive(Debug, Clone)]
    enum GiftCardOutcome {
        Redeemed(i64),
        Balance(i64),
    }

    #[derive(Debug, thiserror::Error)]
    enum GiftCardError {
        #[error("Balance cannot be negative")]
        NegativeBalance,
        #[error("Insufficient balance")]
        Insufficient,
    }

    #[async_trait]
    impl Aggregate for GiftCard {
        type Id = u32;
        type Create = GiftCardCreate;
        type Update = GiftCardTopUp;
        type Command = GiftCardCommand;
        type CommandResult = GiftCardOutcome;
        type Context = ();
        type Error = GiftCardError;

        fn from_create_params(id: u32, params: GiftCardCreate) -> Result<Self, Self::Error> {
            if params.balance < 0 {
                return Err(GiftCardError::NegativeBalance);
            }
            Ok(Self {
                id,
                balance: params.balance,
            })
        }

        async fn on_update(
            &mut self,
            update: GiftCardTopUp,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            if let Some(amount) = update.amount {
                self.balance += amount;
            }
            Ok(())
        }

        async fn handle_command(
            &mut self,
            command: GiftCardCommand,
            _ctx: &Self::Context,
        ) -> Result<GiftCardOutcome, Self::Error> {
            match command {
                GiftCardCommand::Redeem(amount) => {
                    if self.balance < amount {
                        return Err(GiftCardError::Insufficient);
                    }
                    self.balance -= amount;
                    Ok(GiftCardOutcome::Redeemed(self.balance))
                }
                GiftCardCommand::Balance => Ok(GiftCardOutcome::Balance(self.balance)),
            }
        }
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (actor, client) = AggregateActor::<GiftCard>::new(10);
        tokio::spawn(actor.run(()));

        // Create
        let id = client.create(GiftCardCreate { balance: 100 }).await.unwrap();
        assert_eq!(id, 1); // First id should be 1

        // Command mutates state
        let outcome = client
            .command(id, GiftCardCommand::Redeem(40))
            .await
            .unwrap();
        assert!(matches!(outcome, GiftCardOutcome::Redeemed(60)));

        // Get sees the mutation
        let card = client.get(id).await.unwrap().unwrap();
        assert_eq!(card.balance, 60);

        // Update through the hook
        let card = client
            .update(id, GiftCardTopUp { amount: Some(15) })
            .await
            .unwrap();
        assert_eq!(card.balance, 75);
    }

    #[tokio::test]
    async fn test_domain_errors_cross_the_channel() {
        let (actor, client) = AggregateActor::<GiftCard>::new(10);
        tokio::spawn(actor.run(()));

        // Constructor rejection: nothing is stored
        let result = client.create(GiftCardCreate { balance: -5 }).await;
        assert!(matches!(result, Err(ActorError::Aggregate(_))));
        assert!(client.get(1).await.unwrap().is_none());

        // Command rejection leaves state untouched
        let id = client.create(GiftCardCreate { balance: 10 }).await.unwrap();
        let result = client.command(id, GiftCardCommand::Redeem(50)).await;
        assert!(matches!(result, Err(ActorError::Aggregate(_))));
        let card = client.get(id).await.unwrap().unwrap();
        assert_eq!(card.balance, 10);
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found() {
        let (actor, client) = AggregateActor::<GiftCard>::new(10);
        tokio::spawn(actor.run(()));

        let result = client.command(99, GiftCardCommand::Balance).await;
        assert!(matches!(result, Err(ActorError::NotFound(_))));
    }
}
