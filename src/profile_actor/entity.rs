//! Aggregate trait implementation for the Profile domain type.
//!
//! The profile is the only aggregate with a runtime dependency: its context
//! is the [`ProfileStore`]. Hydration happens in `on_create` (load or start
//! from defaults), and every mutating operation pushes the full four-field
//! state back to the store before its result is reported. The in-memory
//! state is mutated first, so a failed save never loses an already-recorded
//! order; the caller sees the store error and can retry.

use crate::framework::Aggregate;
use crate::model::{
    current_date, OrderStatus, Profile, ProfileCreate, ProfileId, ProfileUpdate, Review,
    DEFAULT_DELIVERY_ADDRESS,
};
use crate::profile_actor::{ProfileCommand, ProfileCommandResult, ProfileError};
use crate::store::ProfileStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

async fn sync_to_store(
    profile: &Profile,
    store: &Arc<dyn ProfileStore>,
) -> Result<(), ProfileError> {
    store.save(&profile.user_id, &profile.state()).await?;
    Ok(())
}

#[async_trait]
impl Aggregate for Profile {
    type Id = ProfileId;
    type Create = ProfileCreate;
    type Update = ProfileUpdate;
    type Command = ProfileCommand;
    type CommandResult = ProfileCommandResult;
    type Context = Arc<dyn ProfileStore>;
    type Error = ProfileError;

    fn from_create_params(id: ProfileId, params: ProfileCreate) -> Result<Self, ProfileError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            delivery_address: DEFAULT_DELIVERY_ADDRESS.to_string(),
            favorites: Vec::new(),
            orders: Vec::new(),
            reviews: HashMap::new(),
        })
    }

    /// Hydrates the aggregate from the store. A user with no stored record
    /// keeps the defaults; nothing is written until the first mutation.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), ProfileError> {
        if let Some(state) = ctx.load(&self.user_id).await? {
            self.apply_state(state);
        }
        Ok(())
    }

    /// Applies profile settings updates. Currently only the delivery
    /// address, which must not trim to empty.
    async fn on_update(
        &mut self,
        update: ProfileUpdate,
        ctx: &Self::Context,
    ) -> Result<(), ProfileError> {
        if let Some(address) = update.delivery_address {
            let trimmed = address.trim();
            if trimmed.is_empty() {
                return Err(ProfileError::EmptyAddress);
            }
            self.delivery_address = trimmed.to_string();
        }
        sync_to_store(self, ctx).await
    }

    async fn handle_command(
        &mut self,
        command: ProfileCommand,
        ctx: &Self::Context,
    ) -> Result<ProfileCommandResult, ProfileError> {
        match command {
            ProfileCommand::AddOrderRecord(order) => {
                self.orders.push(order);
                sync_to_store(self, ctx).await?;
                Ok(ProfileCommandResult::OrderRecorded)
            }
            ProfileCommand::ViewOrderHistory => {
                Ok(ProfileCommandResult::Orders(self.view_order_history()))
            }
            ProfileCommand::FilterOrders(filter) => {
                Ok(ProfileCommandResult::Orders(self.filter_orders(&filter)))
            }
            ProfileCommand::UpdateOrderStatus { order_id, status } => {
                match self.orders.iter_mut().find(|o| o.order_id == order_id) {
                    Some(order) => order.status = status,
                    None => return Err(ProfileError::OrderNotFound),
                }
                sync_to_store(self, ctx).await?;
                Ok(ProfileCommandResult::StatusUpdated)
            }
            ProfileCommand::AddFavoriteRestaurant(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ProfileError::EmptyName);
                }
                if self.favorites.iter().any(|f| f == name) {
                    return Err(ProfileError::DuplicateFavorite);
                }
                self.favorites.push(name.to_string());
                sync_to_store(self, ctx).await?;
                Ok(ProfileCommandResult::FavoriteAdded)
            }
            ProfileCommand::RemoveFavoriteRestaurant(name) => {
                let name = name.trim();
                match self.favorites.iter().position(|f| f == name) {
                    Some(index) => {
                        self.favorites.remove(index);
                    }
                    None => return Err(ProfileError::NotAFavorite),
                }
                sync_to_store(self, ctx).await?;
                Ok(ProfileCommandResult::FavoriteRemoved)
            }
            ProfileCommand::ListFavorites => {
                Ok(ProfileCommandResult::Favorites(self.list_favorites()))
            }
            ProfileCommand::AddOrderReview {
                order_id,
                rating,
                text,
            } => {
                if order_id.is_empty() {
                    return Err(ProfileError::MissingOrderId);
                }
                if !(1..=5).contains(&rating) {
                    return Err(ProfileError::InvalidRating(rating));
                }
                let text = text.trim();
                if text.is_empty() {
                    return Err(ProfileError::EmptyReviewText);
                }
                let status = match self.orders.iter().find(|o| o.order_id == order_id) {
                    Some(order) => order.status,
                    None => return Err(ProfileError::OrderNotFound),
                };
                if status != OrderStatus::Delivered {
                    return Err(ProfileError::OrderNotDelivered);
                }
                // Resubmission replaces the earlier review
                self.reviews.insert(
                    order_id,
                    Review {
                        rating,
                        text: text.to_string(),
                        date: current_date(),
                    },
                );
                sync_to_store(self, ctx).await?;
                Ok(ProfileCommandResult::ReviewSaved)
            }
            ProfileCommand::GetReview(order_id) => {
                Ok(ProfileCommandResult::Review(self.get_review(&order_id)))
            }
        }
    }
}
