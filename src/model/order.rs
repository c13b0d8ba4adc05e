//! Order records, status values, and history filters.

use crate::model::cart::CartLineView;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status of a confirmed order.
///
/// `Placed → Preparing → Delivered` is the expected path and `Cancelled` the
/// bail-out, but the ledger does not enforce a transition graph:
/// [`UpdateOrderStatus`](crate::profile_actor::ProfileCommand) overwrites any
/// status with any status. Only the review gate cares about the value: a
/// review can be attached solely while the order is `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Preparing,
    Delivered,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        write!(f, "{s}")
    }
}

/// A confirmed order as recorded in the ledger.
///
/// Immutable once created except for `status`. `date` and `created_at` are
/// kept as strings: they round-trip through the profile store unchanged, and
/// history filtering parses `date` on demand (an unparsable date is excluded
/// from any date-bounded filter rather than failing the call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub items: Vec<CartLineView>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Calendar date of creation, `YYYY-MM-DD`.
    pub date: String,
    /// Local creation timestamp with second precision, used as the sort
    /// tie-breaker within a date.
    pub created_at: String,
}

/// Criteria for [`filter_orders`](crate::model::Profile::filter_orders).
/// Absent fields do not constrain; bound strings that fail to parse as
/// `YYYY-MM-DD` are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

/// Parses a `YYYY-MM-DD` calendar date, `None` on any mismatch.
pub(crate) fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Today's calendar date, `YYYY-MM-DD`.
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The current local timestamp with second precision.
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
