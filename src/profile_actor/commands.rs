//! Commands for the Profile actor.
//!
//! These cover the order ledger (append, history, filtering, status), the
//! favorites list, and post-delivery reviews. The delivery address is not a
//! command; it travels through the aggregate's update path instead.

use crate::model::{OrderFilter, OrderRecord, OrderStatus, Review};

/// Domain operations on a profile beyond create/get/update.
#[derive(Debug, Clone)]
pub enum ProfileCommand {
    /// Appends a confirmed order to the ledger.
    AddOrderRecord(OrderRecord),
    /// Returns all orders, newest first.
    ViewOrderHistory,
    /// Returns orders narrowed by status and/or date range, newest first.
    FilterOrders(OrderFilter),
    /// Overwrites the status of an existing order. Any transition is
    /// accepted; only the review gate cares about the current status.
    ///
    /// # Errors
    /// Fails if no order has `order_id`.
    UpdateOrderStatus {
        order_id: String,
        status: OrderStatus,
    },
    /// Adds a restaurant to the favorites list.
    ///
    /// # Errors
    /// Fails on a blank name or a name that is already listed.
    AddFavoriteRestaurant(String),
    /// Removes a restaurant from the favorites list.
    ///
    /// # Errors
    /// Fails if the name is not listed.
    RemoveFavoriteRestaurant(String),
    /// Returns the favorites in first-insertion order.
    ListFavorites,
    /// Stores a review for a delivered order, replacing any earlier one.
    ///
    /// # Errors
    /// Fails on a blank order id, a rating outside 1..=5, blank text, an
    /// unknown order, or an order that is not `Delivered` yet.
    AddOrderReview {
        order_id: String,
        rating: i32,
        text: String,
    },
    /// Looks up the review for an order, if any.
    GetReview(String),
}

/// Results from ProfileCommands, one variant per command.
///
/// History and filtering share the [`Orders`](ProfileCommandResult::Orders)
/// variant since both project the same ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileCommandResult {
    OrderRecorded,
    Orders(Vec<OrderRecord>),
    StatusUpdated,
    FavoriteAdded,
    FavoriteRemoved,
    Favorites(Vec<String>),
    ReviewSaved,
    Review(Option<Review>),
}
