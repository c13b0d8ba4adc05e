//! The user profile aggregate: order ledger, favorites, reviews, address.
//!
//! [`Profile`] is the long-lived per-user aggregate. The orchestrator never
//! touches it directly; every mutation goes through the profile actor
//! (see [`profile_actor`](crate::profile_actor)), which mirrors the full
//! state to the profile store after each successful write. The read-only
//! projections here (history sorting, filtering, review lookup) are pure and
//! testable without a runtime.

use crate::model::order::{parse_calendar_date, OrderFilter, OrderRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Address used when the store has none recorded for the user.
pub const DEFAULT_DELIVERY_ADDRESS: &str = "123 Main St";

fn default_delivery_address() -> String {
    DEFAULT_DELIVERY_ADDRESS.to_string()
}

/// Type-safe identifier for profile aggregates.
///
/// This is the actor-store key for one hydrated profile; the durable identity
/// is the user id carried inside [`Profile`] and used as the store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub u32);

impl From<u32> for ProfileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "profile_{}", self.0)
    }
}

/// A post-delivery review, keyed by order id (at most one per order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub rating: i32,
    pub text: String,
    /// Calendar date of review creation, `YYYY-MM-DD`.
    pub date: String,
}

/// The four persisted fields of a profile, exactly as the store records them.
///
/// Missing keys in a stored record fall back to the same defaults hydration
/// uses for an unknown user: empty collections and the default address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    #[serde(default = "default_delivery_address")]
    pub delivery_address: String,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub reviews: HashMap<String, Review>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            delivery_address: default_delivery_address(),
            favorites: Vec::new(),
            orders: Vec::new(),
            reviews: HashMap::new(),
        }
    }
}

/// Per-user order/review/favorites state.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    /// Store key, e.g. an email address.
    pub user_id: String,
    pub delivery_address: String,
    /// Restaurant names, first-insertion order, no duplicates.
    pub favorites: Vec<String>,
    /// Append-only; status is the only field ever rewritten.
    pub orders: Vec<OrderRecord>,
    pub reviews: HashMap<String, Review>,
}

impl Profile {
    /// Orders sorted most recent first: descending by date, ties broken by
    /// the creation timestamp. Non-destructive.
    pub fn view_order_history(&self) -> Vec<OrderRecord> {
        let mut orders = self.orders.clone();
        orders.sort_by(|a, b| {
            (b.date.as_str(), b.created_at.as_str())
                .cmp(&(a.date.as_str(), a.created_at.as_str()))
        });
        orders
    }

    /// History narrowed by status and/or an inclusive date range.
    ///
    /// An order whose date does not parse is excluded by whichever bound is
    /// present; a bound that does not parse constrains nothing.
    pub fn filter_orders(&self, filter: &OrderFilter) -> Vec<OrderRecord> {
        let date_from = filter.date_from.as_deref().and_then(parse_calendar_date);
        let date_to = filter.date_to.as_deref().and_then(parse_calendar_date);

        self.view_order_history()
            .into_iter()
            .filter(|order| {
                if let Some(status) = filter.status {
                    if order.status != status {
                        return false;
                    }
                }
                let order_date = parse_calendar_date(&order.date);
                if let Some(from) = date_from {
                    match order_date {
                        Some(d) if d >= from => {}
                        _ => return false,
                    }
                }
                if let Some(to) = date_to {
                    match order_date {
                        Some(d) if d <= to => {}
                        _ => return false,
                    }
                }
                true
            })
            .collect()
    }

    pub fn list_favorites(&self) -> Vec<String> {
        self.favorites.clone()
    }

    pub fn get_review(&self, order_id: &str) -> Option<Review> {
        self.reviews.get(order_id).cloned()
    }

    /// Full-state snapshot pushed to the store after every mutation.
    pub fn state(&self) -> ProfileState {
        ProfileState {
            delivery_address: self.delivery_address.clone(),
            favorites: self.favorites.clone(),
            orders: self.orders.clone(),
            reviews: self.reviews.clone(),
        }
    }

    /// Replace local state with a stored record (hydration).
    pub fn apply_state(&mut self, state: ProfileState) {
        self.delivery_address = state.delivery_address;
        self.favorites = state.favorites;
        self.orders = state.orders;
        self.reviews = state.reviews;
    }
}

/// Payload for hydrating a profile aggregate for one user.
#[derive(Debug, Clone)]
pub struct ProfileCreate {
    pub user_id: String,
}

/// Update payload; `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub delivery_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order::OrderStatus;
    use rust_decimal::Decimal;

    fn order(order_id: &str, date: &str, created_at: &str, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            status,
            date: date.to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn profile_with(orders: Vec<OrderRecord>) -> Profile {
        Profile {
            id: ProfileId(1),
            user_id: "user@example.com".to_string(),
            delivery_address: DEFAULT_DELIVERY_ADDRESS.to_string(),
            favorites: Vec::new(),
            orders,
            reviews: HashMap::new(),
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let profile = profile_with(vec![
            order("ORD-1", "2025-01-01", "2025-01-01T08:00:00", OrderStatus::Placed),
            order("ORD-3", "2025-02-01", "2025-02-01T08:00:00", OrderStatus::Placed),
            order("ORD-2", "2025-01-15", "2025-01-15T08:00:00", OrderStatus::Placed),
        ]);

        let ids: Vec<_> = profile
            .view_order_history()
            .into_iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, ["ORD-3", "ORD-2", "ORD-1"]);
        // Stored order is untouched
        assert_eq!(profile.orders[0].order_id, "ORD-1");
    }

    #[test]
    fn test_history_ties_break_on_created_at() {
        let profile = profile_with(vec![
            order("ORD-A", "2025-01-01", "2025-01-01T08:00:00", OrderStatus::Placed),
            order("ORD-B", "2025-01-01", "2025-01-01T12:30:00", OrderStatus::Placed),
        ]);

        let ids: Vec<_> = profile
            .view_order_history()
            .into_iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, ["ORD-B", "ORD-A"]);
    }

    #[test]
    fn test_filter_by_status() {
        let profile = profile_with(vec![
            order("ORD-1", "2025-01-01", "2025-01-01T08:00:00", OrderStatus::Delivered),
            order("ORD-2", "2025-01-02", "2025-01-02T08:00:00", OrderStatus::Placed),
        ]);

        let filter = OrderFilter {
            status: Some(OrderStatus::Delivered),
            ..Default::default()
        };
        let hits = profile.filter_orders(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].order_id, "ORD-1");
    }

    #[test]
    fn test_filter_date_range_is_inclusive() {
        let profile = profile_with(vec![
            order("ORD-1", "2025-01-01", "2025-01-01T08:00:00", OrderStatus::Placed),
            order("ORD-2", "2025-01-31", "2025-01-31T08:00:00", OrderStatus::Placed),
            order("ORD-3", "2025-02-01", "2025-02-01T08:00:00", OrderStatus::Placed),
        ]);

        let filter = OrderFilter {
            date_from: Some("2025-01-01".to_string()),
            date_to: Some("2025-01-31".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = profile
            .filter_orders(&filter)
            .into_iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, ["ORD-2", "ORD-1"]);
    }

    #[test]
    fn test_unparsable_order_date_is_excluded_by_any_bound() {
        let profile = profile_with(vec![
            order("ORD-BAD", "someday", "2025-01-01T08:00:00", OrderStatus::Placed),
            order("ORD-OK", "2025-01-10", "2025-01-10T08:00:00", OrderStatus::Placed),
        ]);

        // Without bounds the malformed date is still listed
        assert_eq!(profile.filter_orders(&OrderFilter::default()).len(), 2);

        let filter = OrderFilter {
            date_to: Some("2025-12-31".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = profile
            .filter_orders(&filter)
            .into_iter()
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, ["ORD-OK"]);
    }

    #[test]
    fn test_unparsable_bound_is_treated_as_absent() {
        let profile = profile_with(vec![order(
            "ORD-1",
            "2025-01-10",
            "2025-01-10T08:00:00",
            OrderStatus::Placed,
        )]);

        let filter = OrderFilter {
            date_from: Some("not-a-date".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.filter_orders(&filter).len(), 1);
    }

    #[test]
    fn test_state_snapshot_round_trips() {
        let mut profile = profile_with(vec![order(
            "ORD-1",
            "2025-01-10",
            "2025-01-10T08:00:00",
            OrderStatus::Placed,
        )]);
        profile.favorites.push("Pizza Palace".to_string());
        profile.reviews.insert(
            "ORD-1".to_string(),
            Review {
                rating: 5,
                text: "Great".to_string(),
                date: "2025-01-11".to_string(),
            },
        );

        let state = profile.state();
        let mut other = profile_with(Vec::new());
        other.apply_state(state.clone());
        assert_eq!(other.state(), state);
    }

    #[test]
    fn test_state_defaults_fill_missing_keys() {
        // A record written by an older schema may lack every profile key
        let state: ProfileState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.delivery_address, DEFAULT_DELIVERY_ADDRESS);
        assert!(state.favorites.is_empty());
        assert!(state.orders.is_empty());
        assert!(state.reviews.is_empty());
    }
}
