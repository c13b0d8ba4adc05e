//! Order placement orchestration.
//!
//! [`OrderPlacement`] composes the cart, the menu, the payment gateway, and
//! the profile ledger into the confirmation sequence:
//!
//! validate → price → charge → record → clear
//!
//! The sequence is written so a failure at any step leaves earlier state
//! untouched. In particular a declined payment changes nothing, and a paid
//! order is appended to the ledger before the cart is cleared, so a failed
//! append (store down, say) surfaces as an error while the cart still holds
//! the lines for a retry.

pub mod error;

pub use error::CheckoutError;

use crate::clients::{ActorClient, CartClient, ProfileClient};
use crate::menu::AvailabilityOracle;
use crate::model::{
    current_date, current_timestamp, CartId, CartLineView, OrderRecord, OrderStatus,
    PricingResult, ProfileId,
};
use crate::payment::PaymentAuthorizer;
use crate::profile_actor::ProfileError;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Fixed estimate returned with every confirmation.
pub const ESTIMATED_DELIVERY: &str = "45 minutes";

/// Read-only projection shown to the user before confirming.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub items: Vec<CartLineView>,
    pub totals: PricingResult,
    pub delivery_address: String,
}

/// Receipt for a successfully placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub estimated_delivery: String,
}

fn generate_order_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", hex[..10].to_uppercase())
}

/// One user's ordering session: a cart, a profile, and the menu to validate
/// against. Holds client handles only, so it is cheap to construct per
/// session.
pub struct OrderPlacement {
    cart: CartClient,
    cart_id: CartId,
    profile: ProfileClient,
    profile_id: ProfileId,
    menu: Arc<dyn AvailabilityOracle>,
}

impl OrderPlacement {
    pub fn new(
        cart: CartClient,
        cart_id: CartId,
        profile: ProfileClient,
        profile_id: ProfileId,
        menu: Arc<dyn AvailabilityOracle>,
    ) -> Self {
        Self {
            cart,
            cart_id,
            profile,
            profile_id,
            menu,
        }
    }

    async fn validated_items(&self) -> Result<Vec<CartLineView>, CheckoutError> {
        let items = self.cart.view(self.cart_id).await?;
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        // First unavailable item aborts, checked in cart order
        for item in &items {
            if !self.menu.is_item_available(&item.name) {
                return Err(CheckoutError::ItemUnavailable(item.name.clone()));
            }
        }
        Ok(items)
    }

    /// Checks that the cart is non-empty and every line is orderable.
    #[instrument(skip(self))]
    pub async fn validate_order(&self) -> Result<(), CheckoutError> {
        self.validated_items().await.map(|_| ())
    }

    /// Combines the cart view, the pricing, and the delivery address for the
    /// confirmation screen. No side effects.
    #[instrument(skip(self))]
    pub async fn proceed_to_checkout(&self) -> Result<CheckoutSummary, CheckoutError> {
        let items = self.cart.view(self.cart_id).await?;
        let totals = self.cart.calculate_total(self.cart_id).await?;
        let profile = self
            .profile
            .get(self.profile_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(self.profile_id.to_string()))?;

        Ok(CheckoutSummary {
            items,
            totals,
            delivery_address: profile.delivery_address,
        })
    }

    /// Places the order: validates, prices, charges, records, clears.
    ///
    /// # Errors
    /// [`CheckoutError::EmptyCart`] / [`CheckoutError::ItemUnavailable`] from
    /// validation and [`CheckoutError::PaymentFailed`] from a decline all
    /// abort with no state change. A ledger failure after a successful charge
    /// surfaces as [`CheckoutError::Profile`] and leaves the cart intact.
    #[instrument(skip(self, payment))]
    pub async fn confirm_order(
        &self,
        payment: &dyn PaymentAuthorizer,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let items = self.validated_items().await?;
        let totals = self.cart.calculate_total(self.cart_id).await?;

        if !payment.charge(totals.total) {
            warn!(total = %totals.total, "Payment declined");
            return Err(CheckoutError::PaymentFailed);
        }

        let order_id = generate_order_id();
        let record = OrderRecord {
            order_id: order_id.clone(),
            items,
            total_amount: totals.total,
            status: OrderStatus::Placed,
            date: current_date(),
            created_at: current_timestamp(),
        };

        // Record before clearing: the charge already happened, so the order
        // must land in the ledger before the cart lines are given up.
        self.profile.add_order_record(self.profile_id, record).await?;
        self.cart.clear(self.cart_id).await?;

        info!(%order_id, total = %totals.total, "Order placed");
        Ok(OrderConfirmation {
            order_id,
            estimated_delivery: ESTIMATED_DELIVERY.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::CartCommandResult;
    use crate::framework::mock::MockClient;
    use crate::menu::StaticMenu;
    use crate::model::{Cart, Profile};
    use crate::payment::BasicPayment;
    use crate::profile_actor::ProfileCommandResult;
    use rust_decimal::Decimal;

    fn pizza_line() -> CartLineView {
        CartLineView {
            name: "Pizza".to_string(),
            quantity: 1,
            subtotal: Decimal::new(1299, 2),
        }
    }

    fn pizza_totals() -> PricingResult {
        PricingResult {
            subtotal: Decimal::new(1299, 2),
            tax: Decimal::new(130, 2),
            delivery_fee: Decimal::new(500, 2),
            total: Decimal::new(1929, 2),
        }
    }

    fn placement(
        cart_mock: &MockClient<Cart>,
        profile_mock: &MockClient<Profile>,
        menu: StaticMenu,
    ) -> OrderPlacement {
        OrderPlacement::new(
            CartClient::new(cart_mock.client()),
            CartId(1),
            ProfileClient::new(profile_mock.client()),
            ProfileId(1),
            Arc::new(menu),
        )
    }

    #[test]
    fn test_order_ids_have_the_documented_shape() {
        let id = generate_order_id();
        assert!(id.starts_with("ORD-"));
        assert_eq!(id.len(), 14);
        assert!(id[4..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_order_ids_do_not_repeat() {
        let first = generate_order_id();
        let second = generate_order_id();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_confirm_records_then_clears() {
        let mut cart_mock = MockClient::<Cart>::new();
        let mut profile_mock = MockClient::<Profile>::new();

        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Items(vec![pizza_line()]));
        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Totals(pizza_totals()));
        profile_mock
            .expect_command(ProfileId(1))
            .return_ok(ProfileCommandResult::OrderRecorded);
        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Cleared);

        let placement = placement(&cart_mock, &profile_mock, StaticMenu::new(["Pizza"]));
        let confirmation = placement
            .confirm_order(&BasicPayment)
            .await
            .expect("Failed to confirm order");

        assert!(confirmation.order_id.starts_with("ORD-"));
        assert_eq!(confirmation.estimated_delivery, ESTIMATED_DELIVERY);
        cart_mock.verify();
        profile_mock.verify();
    }

    #[tokio::test]
    async fn test_empty_cart_aborts_before_any_other_request() {
        let mut cart_mock = MockClient::<Cart>::new();
        let profile_mock = MockClient::<Profile>::new();

        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Items(Vec::new()));

        let placement = placement(&cart_mock, &profile_mock, StaticMenu::new(["Pizza"]));
        let result = placement.confirm_order(&BasicPayment).await;

        assert_eq!(result, Err(CheckoutError::EmptyCart));
        cart_mock.verify();
        profile_mock.verify();
    }

    #[tokio::test]
    async fn test_unavailable_item_names_the_offender() {
        let mut cart_mock = MockClient::<Cart>::new();
        let profile_mock = MockClient::<Profile>::new();

        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Items(vec![pizza_line()]));

        // Menu without Pizza
        let placement = placement(&cart_mock, &profile_mock, StaticMenu::new(["Salad"]));
        let result = placement.validate_order().await;

        assert_eq!(
            result,
            Err(CheckoutError::ItemUnavailable("Pizza".to_string()))
        );
        cart_mock.verify();
        profile_mock.verify();
    }

    #[tokio::test]
    async fn test_declined_payment_stops_before_recording() {
        struct DecliningPayment;
        impl PaymentAuthorizer for DecliningPayment {
            fn charge(&self, _amount: Decimal) -> bool {
                false
            }
        }

        let mut cart_mock = MockClient::<Cart>::new();
        let profile_mock = MockClient::<Profile>::new();

        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Items(vec![pizza_line()]));
        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Totals(pizza_totals()));

        let placement = placement(&cart_mock, &profile_mock, StaticMenu::new(["Pizza"]));
        let result = placement.confirm_order(&DecliningPayment).await;

        assert_eq!(result, Err(CheckoutError::PaymentFailed));
        // No AddOrderRecord, no Clear: both queues are drained
        cart_mock.verify();
        profile_mock.verify();
    }

    #[tokio::test]
    async fn test_checkout_summary_reads_the_profile_address() {
        use std::collections::HashMap;

        let mut cart_mock = MockClient::<Cart>::new();
        let mut profile_mock = MockClient::<Profile>::new();

        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Items(vec![pizza_line()]));
        cart_mock
            .expect_command(CartId(1))
            .return_ok(CartCommandResult::Totals(pizza_totals()));
        profile_mock.expect_get(ProfileId(1)).return_ok(Some(Profile {
            id: ProfileId(1),
            user_id: "user@example.com".to_string(),
            delivery_address: "42 Elm St".to_string(),
            favorites: Vec::new(),
            orders: Vec::new(),
            reviews: HashMap::new(),
        }));

        let placement = placement(&cart_mock, &profile_mock, StaticMenu::new(["Pizza"]));
        let summary = placement
            .proceed_to_checkout()
            .await
            .expect("Failed to build summary");

        assert_eq!(summary.items, vec![pizza_line()]);
        assert_eq!(summary.totals, pizza_totals());
        assert_eq!(summary.delivery_address, "42 Elm St");
        cart_mock.verify();
        profile_mock.verify();
    }
}
