//! Cart state and pricing.
//!
//! A [`Cart`] holds the line items of one in-progress order. Lines are keyed
//! by item name (at most one line per name, insertion order preserved) and
//! merged on repeated adds. Pricing is a pure function of the lines: 10% tax
//! on the subtotal plus a flat delivery fee whenever the cart is non-empty,
//! everything carried as [`Decimal`] at two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for carts. One cart per checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One aggregated (item, quantity) entry in an in-progress order.
///
/// `quantity` is signed: the add path rejects non-positive quantities, but
/// `update_item_quantity` deliberately does not (see
/// [`CartCommand::UpdateItemQuantity`](crate::cart_actor::CartCommand)), so a
/// line can legitimately hold a zero or negative quantity afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}

/// Read-only snapshot of one line: what confirmation screens show and what
/// gets frozen into an order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineView {
    pub name: String,
    pub quantity: i32,
    pub subtotal: Decimal,
}

/// Subtotal / tax / fee / total for the current cart contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// 10% of the subtotal.
fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Flat 5.00 fee charged whenever the subtotal is positive.
fn flat_delivery_fee() -> Decimal {
    Decimal::new(500, 2)
}

/// Two-decimal money rounding, midpoints away from zero.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The line items of one in-progress order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self { id, lines: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot of every line with its extended subtotal.
    pub fn view(&self) -> Vec<CartLineView> {
        self.lines
            .iter()
            .map(|line| CartLineView {
                name: line.name.clone(),
                quantity: line.quantity,
                subtotal: round_money(line.unit_price * Decimal::from(line.quantity)),
            })
            .collect()
    }

    /// Pricing per the formula: tax = subtotal × 0.10, delivery fee 5.00 when
    /// the subtotal is positive, total = subtotal + tax + fee. An empty cart
    /// prices to all zeros.
    pub fn totals(&self) -> PricingResult {
        let subtotal: Decimal = self
            .lines
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum();
        let tax = subtotal * tax_rate();
        let delivery_fee = if subtotal > Decimal::ZERO {
            flat_delivery_fee()
        } else {
            Decimal::ZERO
        };
        let total = subtotal + tax + delivery_fee;
        PricingResult {
            subtotal: round_money(subtotal),
            tax: round_money(tax),
            delivery_fee,
            total: round_money(total),
        }
    }
}

/// Payload for opening a new, empty cart.
#[derive(Debug, Clone)]
pub struct CartCreate;

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn cart_with(lines: &[(&str, &str, i32)]) -> Cart {
        let mut cart = Cart::new(CartId(1));
        cart.lines = lines
            .iter()
            .map(|(name, price, quantity)| CartLine {
                name: name.to_string(),
                unit_price: dec(price),
                quantity: *quantity,
            })
            .collect();
        cart
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let totals = cart_with(&[]).totals();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.delivery_fee, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_totals_formula() {
        // 12.99 → tax 1.299, fee 5.00, total 19.289 → rounded 19.29
        let totals = cart_with(&[("Pizza", "12.99", 1)]).totals();
        assert_eq!(totals.subtotal, dec("12.99"));
        assert_eq!(totals.tax, dec("1.30"));
        assert_eq!(totals.delivery_fee, dec("5.00"));
        assert_eq!(totals.total, dec("19.29"));
    }

    #[test]
    fn test_totals_sum_multiple_lines() {
        let totals = cart_with(&[("Burger", "8.99", 2), ("Salad", "4.50", 1)]).totals();
        assert_eq!(totals.subtotal, dec("22.48"));
        assert_eq!(totals.tax, dec("2.25")); // 2.248 rounded to two places
        assert_eq!(totals.total, dec("29.73"));
    }

    #[test]
    fn test_view_extends_line_subtotals() {
        let views = cart_with(&[("Burger", "8.99", 2)]).view();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Burger");
        assert_eq!(views[0].quantity, 2);
        assert_eq!(views[0].subtotal, dec("17.98"));
    }
}
