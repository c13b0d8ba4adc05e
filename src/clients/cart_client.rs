//! # Cart Client
//!
//! High-level API for the Cart actor. Wraps an [`AggregateClient<Cart>`] and
//! exposes one method per cart operation, unwrapping command results into
//! plain values.

use crate::cart_actor::{CartCommand, CartCommandResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{ActorError, AggregateClient};
use crate::model::{Cart, CartCreate, CartId, CartLineView, PricingResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: AggregateClient<Cart>,
}

impl CartClient {
    pub fn new(inner: AggregateClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &AggregateClient<Cart> {
        &self.inner
    }

    fn map_error(e: ActorError) -> CartError {
        match e {
            ActorError::Aggregate(inner) => match inner.downcast::<CartError>() {
                Ok(domain) => *domain,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Creates a fresh empty cart and returns its id.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(Self::map_error)
    }

    /// Adds an item, merging with an existing line of the same name.
    ///
    /// Returns the line's quantity after the merge.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        id: CartId,
        name: &str,
        unit_price: Decimal,
        quantity: i32,
    ) -> Result<i32, CartError> {
        debug!("Adding {} x{} to {}", quantity, name, id);
        match self
            .inner
            .command(
                id,
                CartCommand::AddItem {
                    name: name.to_string(),
                    unit_price,
                    quantity,
                },
            )
            .await
        {
            Ok(CartCommandResult::ItemAdded(new_quantity)) => Ok(new_quantity),
            Ok(_) => unreachable!("AddItem command must return ItemAdded result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes the named line. Succeeds even when the line does not exist.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, name: &str) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .inner
            .command(
                id,
                CartCommand::RemoveItem {
                    name: name.to_string(),
                },
            )
            .await
        {
            Ok(CartCommandResult::ItemRemoved) => Ok(()),
            Ok(_) => unreachable!("RemoveItem command must return ItemRemoved result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Overwrites the quantity of an existing line.
    #[instrument(skip(self))]
    pub async fn update_item_quantity(
        &self,
        id: CartId,
        name: &str,
        quantity: i32,
    ) -> Result<(), CartError> {
        debug!("Sending request");
        match self
            .inner
            .command(
                id,
                CartCommand::UpdateItemQuantity {
                    name: name.to_string(),
                    quantity,
                },
            )
            .await
        {
            Ok(CartCommandResult::QuantityUpdated) => Ok(()),
            Ok(_) => unreachable!("UpdateItemQuantity command must return QuantityUpdated result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Prices the current contents.
    #[instrument(skip(self))]
    pub async fn calculate_total(&self, id: CartId) -> Result<PricingResult, CartError> {
        debug!("Sending request");
        match self.inner.command(id, CartCommand::CalculateTotal).await {
            Ok(CartCommandResult::Totals(totals)) => Ok(totals),
            Ok(_) => unreachable!("CalculateTotal command must return Totals result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns a per-line snapshot of the cart.
    #[instrument(skip(self))]
    pub async fn view(&self, id: CartId) -> Result<Vec<CartLineView>, CartError> {
        debug!("Sending request");
        match self.inner.command(id, CartCommand::View).await {
            Ok(CartCommandResult::Items(items)) => Ok(items),
            Ok(_) => unreachable!("View command must return Items result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Empties the cart.
    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.command(id, CartCommand::Clear).await {
            Ok(CartCommandResult::Cleared) => Ok(()),
            Ok(_) => unreachable!("Clear command must return Cleared result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
