//! # Profile Client
//!
//! High-level API for the Profile actor: order ledger, favorites, reviews,
//! and delivery address. Wraps an [`AggregateClient<Profile>`].

use crate::clients::actor_client::ActorClient;
use crate::framework::{ActorError, AggregateClient};
use crate::model::{
    OrderFilter, OrderRecord, OrderStatus, Profile, ProfileCreate, ProfileId, ProfileUpdate,
    Review,
};
use crate::profile_actor::{ProfileCommand, ProfileCommandResult, ProfileError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Profile actor.
#[derive(Clone)]
pub struct ProfileClient {
    inner: AggregateClient<Profile>,
}

impl ProfileClient {
    pub fn new(inner: AggregateClient<Profile>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Profile> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &AggregateClient<Profile> {
        &self.inner
    }

    fn map_error(e: ActorError) -> ProfileError {
        match e {
            ActorError::Aggregate(inner) => match inner.downcast::<ProfileError>() {
                Ok(domain) => *domain,
                Err(other) => ProfileError::ActorCommunicationError(other.to_string()),
            },
            other => ProfileError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProfileClient {
    /// Hydrates a profile aggregate for `user_id` and returns its id.
    #[instrument(skip(self))]
    pub async fn create_profile(&self, user_id: &str) -> Result<ProfileId, ProfileError> {
        debug!("Sending request");
        self.inner
            .create(ProfileCreate {
                user_id: user_id.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Replaces the delivery address. The address is trimmed and must not be
    /// empty. Returns the updated profile snapshot.
    #[instrument(skip(self))]
    pub async fn update_delivery_address(
        &self,
        id: ProfileId,
        address: &str,
    ) -> Result<Profile, ProfileError> {
        debug!("Sending request");
        self.inner
            .update(
                id,
                ProfileUpdate {
                    delivery_address: Some(address.to_string()),
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// Appends a confirmed order to the ledger.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn add_order_record(
        &self,
        id: ProfileId,
        order: OrderRecord,
    ) -> Result<(), ProfileError> {
        debug!("Sending request");
        match self
            .inner
            .command(id, ProfileCommand::AddOrderRecord(order))
            .await
        {
            Ok(ProfileCommandResult::OrderRecorded) => Ok(()),
            Ok(_) => unreachable!("AddOrderRecord command must return OrderRecorded result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns all orders, newest first.
    #[instrument(skip(self))]
    pub async fn view_order_history(&self, id: ProfileId) -> Result<Vec<OrderRecord>, ProfileError> {
        debug!("Sending request");
        match self
            .inner
            .command(id, ProfileCommand::ViewOrderHistory)
            .await
        {
            Ok(ProfileCommandResult::Orders(orders)) => Ok(orders),
            Ok(_) => unreachable!("ViewOrderHistory command must return Orders result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns orders matching the filter, newest first.
    #[instrument(skip(self))]
    pub async fn filter_orders(
        &self,
        id: ProfileId,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, ProfileError> {
        debug!("Sending request");
        match self
            .inner
            .command(id, ProfileCommand::FilterOrders(filter))
            .await
        {
            Ok(ProfileCommandResult::Orders(orders)) => Ok(orders),
            Ok(_) => unreachable!("FilterOrders command must return Orders result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Overwrites the status of an existing order.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: ProfileId,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), ProfileError> {
        debug!("Setting {} to {}", order_id, status);
        match self
            .inner
            .command(
                id,
                ProfileCommand::UpdateOrderStatus {
                    order_id: order_id.to_string(),
                    status,
                },
            )
            .await
        {
            Ok(ProfileCommandResult::StatusUpdated) => Ok(()),
            Ok(_) => unreachable!("UpdateOrderStatus command must return StatusUpdated result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Adds a restaurant to the favorites list.
    #[instrument(skip(self))]
    pub async fn add_favorite_restaurant(
        &self,
        id: ProfileId,
        name: &str,
    ) -> Result<(), ProfileError> {
        debug!("Sending request");
        match self
            .inner
            .command(id, ProfileCommand::AddFavoriteRestaurant(name.to_string()))
            .await
        {
            Ok(ProfileCommandResult::FavoriteAdded) => Ok(()),
            Ok(_) => unreachable!("AddFavoriteRestaurant command must return FavoriteAdded result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes a restaurant from the favorites list.
    #[instrument(skip(self))]
    pub async fn remove_favorite_restaurant(
        &self,
        id: ProfileId,
        name: &str,
    ) -> Result<(), ProfileError> {
        debug!("Sending request");
        match self
            .inner
            .command(
                id,
                ProfileCommand::RemoveFavoriteRestaurant(name.to_string()),
            )
            .await
        {
            Ok(ProfileCommandResult::FavoriteRemoved) => Ok(()),
            Ok(_) => {
                unreachable!("RemoveFavoriteRestaurant command must return FavoriteRemoved result")
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns the favorites in first-insertion order.
    #[instrument(skip(self))]
    pub async fn list_favorites(&self, id: ProfileId) -> Result<Vec<String>, ProfileError> {
        debug!("Sending request");
        match self.inner.command(id, ProfileCommand::ListFavorites).await {
            Ok(ProfileCommandResult::Favorites(favorites)) => Ok(favorites),
            Ok(_) => unreachable!("ListFavorites command must return Favorites result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Stores a review for a delivered order.
    #[instrument(skip(self, text))]
    pub async fn add_order_review(
        &self,
        id: ProfileId,
        order_id: &str,
        rating: i32,
        text: &str,
    ) -> Result<(), ProfileError> {
        debug!("Reviewing {} with rating {}", order_id, rating);
        match self
            .inner
            .command(
                id,
                ProfileCommand::AddOrderReview {
                    order_id: order_id.to_string(),
                    rating,
                    text: text.to_string(),
                },
            )
            .await
        {
            Ok(ProfileCommandResult::ReviewSaved) => Ok(()),
            Ok(_) => unreachable!("AddOrderReview command must return ReviewSaved result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Looks up the review for an order, if any.
    #[instrument(skip(self))]
    pub async fn get_review(
        &self,
        id: ProfileId,
        order_id: &str,
    ) -> Result<Option<Review>, ProfileError> {
        debug!("Sending request");
        match self
            .inner
            .command(id, ProfileCommand::GetReview(order_id.to_string()))
            .await
        {
            Ok(ProfileCommandResult::Review(review)) => Ok(review),
            Ok(_) => unreachable!("GetReview command must return Review result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
