//! Aggregate trait implementation for the Cart domain type.
//!
//! This wires [`Cart`] into the generic [`crate::framework::AggregateActor`].
//! All mutations happen here, inside the actor task, so concurrent clients
//! can never interleave partial cart updates. Pricing itself lives on the
//! model ([`Cart::totals`]); the command handler only dispatches to it.

use crate::cart_actor::{CartCommand, CartCommandResult, CartError};
use crate::framework::Aggregate;
use crate::model::{Cart, CartCreate, CartId, CartLine};
use async_trait::async_trait;

#[async_trait]
impl Aggregate for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Command = CartCommand;
    type CommandResult = CartCommandResult;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id))
    }

    /// Carts carry no updatable settings; everything goes through commands.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_command(
        &mut self,
        command: CartCommand,
        _ctx: &(),
    ) -> Result<CartCommandResult, CartError> {
        match command {
            CartCommand::AddItem {
                name,
                unit_price,
                quantity,
            } => {
                if quantity <= 0 {
                    return Err(CartError::InvalidQuantity(quantity));
                }
                let new_quantity = match self.lines.iter_mut().find(|line| line.name == name) {
                    // Merge with the existing line; its unit price stands.
                    Some(line) => {
                        line.quantity += quantity;
                        line.quantity
                    }
                    None => {
                        self.lines.push(CartLine {
                            name,
                            unit_price,
                            quantity,
                        });
                        quantity
                    }
                };
                Ok(CartCommandResult::ItemAdded(new_quantity))
            }
            CartCommand::RemoveItem { name } => {
                self.lines.retain(|line| line.name != name);
                Ok(CartCommandResult::ItemRemoved)
            }
            CartCommand::UpdateItemQuantity { name, quantity } => {
                match self.lines.iter_mut().find(|line| line.name == name) {
                    // Any quantity is accepted here, including zero and
                    // negatives; the line stays in the cart regardless.
                    Some(line) => {
                        line.quantity = quantity;
                        Ok(CartCommandResult::QuantityUpdated)
                    }
                    None => Err(CartError::NotFound(name)),
                }
            }
            CartCommand::CalculateTotal => Ok(CartCommandResult::Totals(self.totals())),
            CartCommand::View => Ok(CartCommandResult::Items(self.view())),
            CartCommand::Clear => {
                self.lines.clear();
                Ok(CartCommandResult::Cleared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn empty_cart() -> Cart {
        Cart::new(CartId(1))
    }

    async fn add(cart: &mut Cart, name: &str, price: &str, quantity: i32) -> CartCommandResult {
        cart.handle_command(
            CartCommand::AddItem {
                name: name.to_string(),
                unit_price: price.parse::<Decimal>().expect("Failed to parse price"),
                quantity,
            },
            &(),
        )
        .await
        .expect("Failed to add item")
    }

    #[tokio::test]
    async fn test_add_merges_lines_with_the_same_name() {
        let mut cart = empty_cart();

        // Two adds of the same name collapse into one line
        assert_eq!(add(&mut cart, "Pizza", "12.99", 1).await, CartCommandResult::ItemAdded(1));
        assert_eq!(add(&mut cart, "Pizza", "12.99", 2).await, CartCommandResult::ItemAdded(3));

        assert_eq!(cart.lines.len(), 1, "Expected a single merged line");
        assert_eq!(cart.lines[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_add_rejects_non_positive_quantities() {
        let mut cart = empty_cart();

        for quantity in [0, -1] {
            let result = cart
                .handle_command(
                    CartCommand::AddItem {
                        name: "Pizza".to_string(),
                        unit_price: Decimal::new(1299, 2),
                        quantity,
                    },
                    &(),
                )
                .await;
            assert_eq!(result, Err(CartError::InvalidQuantity(quantity)));
        }
        assert!(cart.is_empty(), "Rejected adds must not touch the cart");
    }

    #[tokio::test]
    async fn test_update_quantity_keeps_non_positive_lines() {
        let mut cart = empty_cart();
        add(&mut cart, "Salad", "4.50", 2).await;

        let result = cart
            .handle_command(
                CartCommand::UpdateItemQuantity {
                    name: "Salad".to_string(),
                    quantity: 0,
                },
                &(),
            )
            .await
            .expect("Failed to update quantity");
        assert_eq!(result, CartCommandResult::QuantityUpdated);

        // The line survives with quantity zero
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 0);
    }

    #[tokio::test]
    async fn test_update_quantity_of_missing_item_fails() {
        let mut cart = empty_cart();

        let result = cart
            .handle_command(
                CartCommand::UpdateItemQuantity {
                    name: "Burger".to_string(),
                    quantity: 2,
                },
                &(),
            )
            .await;
        assert_eq!(result, Err(CartError::NotFound("Burger".to_string())));
    }

    #[tokio::test]
    async fn test_remove_is_a_no_op_for_unknown_items() {
        let mut cart = empty_cart();
        add(&mut cart, "Burger", "8.99", 1).await;

        let result = cart
            .handle_command(
                CartCommand::RemoveItem {
                    name: "Sushi".to_string(),
                },
                &(),
            )
            .await
            .expect("Remove of an unknown item must succeed");
        assert_eq!(result, CartCommandResult::ItemRemoved);
        assert_eq!(cart.lines.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_deletes_the_whole_line() {
        let mut cart = empty_cart();
        add(&mut cart, "Burger", "8.99", 3).await;

        cart.handle_command(
            CartCommand::RemoveItem {
                name: "Burger".to_string(),
            },
            &(),
        )
        .await
        .expect("Failed to remove item");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_the_cart() {
        let mut cart = empty_cart();
        add(&mut cart, "Burger", "8.99", 1).await;
        add(&mut cart, "Salad", "4.50", 2).await;

        let result = cart
            .handle_command(CartCommand::Clear, &())
            .await
            .expect("Failed to clear cart");
        assert_eq!(result, CartCommandResult::Cleared);
        assert!(cart.is_empty());

        // Cleared carts price to zero
        match cart
            .handle_command(CartCommand::CalculateTotal, &())
            .await
            .expect("Failed to price cart")
        {
            CartCommandResult::Totals(totals) => {
                assert_eq!(totals.total, Decimal::ZERO);
            }
            other => panic!("Expected Totals, got {:?}", other),
        }
    }
}
