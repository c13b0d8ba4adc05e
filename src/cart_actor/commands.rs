//! Commands for the Cart actor.
//!
//! Every cart mutation and read goes through one of these variants so the
//! actor serializes them with the rest of the cart's traffic. Results match
//! commands 1:1.

use crate::model::{CartLineView, PricingResult};
use rust_decimal::Decimal;

/// Domain operations on a cart beyond create/get/update.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Adds an item, merging by exact name with any existing line.
    ///
    /// # Errors
    /// Fails if `quantity` is zero or negative.
    AddItem {
        name: String,
        unit_price: Decimal,
        quantity: i32,
    },
    /// Removes the named line entirely. Succeeds even if no such line exists.
    RemoveItem { name: String },
    /// Overwrites the quantity of an existing line.
    ///
    /// # Errors
    /// Fails if the named item is not in the cart.
    UpdateItemQuantity { name: String, quantity: i32 },
    /// Prices the current contents (subtotal, tax, delivery fee, total).
    CalculateTotal,
    /// Returns a per-line snapshot with extended subtotals.
    View,
    /// Empties the cart.
    Clear,
}

/// Results from CartCommands, one variant per command.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommandResult {
    /// The item's quantity after the merge.
    ItemAdded(i32),
    ItemRemoved,
    QuantityUpdated,
    Totals(PricingResult),
    Items(Vec<CartLineView>),
    Cleared,
}
