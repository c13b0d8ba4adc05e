//! # Generic Client
//!
//! The sender half of an aggregate actor. Holds only an mpsc sender, so it is
//! cheap to clone and share across tasks; every method is async and resolves
//! once the actor has replied.

use crate::framework::aggregate::Aggregate;
use crate::framework::error::ActorError;
use crate::framework::message::AggregateRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to an [`AggregateActor`](crate::framework::AggregateActor).
#[derive(Clone)]
pub struct AggregateClient<T: Aggregate> {
    sender: mpsc::Sender<AggregateRequest<T>>,
}

impl<T: Aggregate> AggregateClient<T> {
    pub fn new(sender: mpsc::Sender<AggregateRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AggregateRequest::Create { params, respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AggregateRequest::Get { id, respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AggregateRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }

    pub async fn command(
        &self,
        id: T::Id,
        command: T::Command,
    ) -> Result<T::CommandResult, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AggregateRequest::Command {
                id,
                command,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }
}
