//! # MealDrop Demo
//!
//! One user orders dinner, the delivery completes, and they leave a review.
//! The flow exercises every layer: cart actor, checkout orchestration,
//! profile ledger, and the JSON file store.
//!
//! State persists in `users.json` by default; set `MEALDROP_STORE` to use a
//! different file.

use mealdrop::checkout::OrderPlacement;
use mealdrop::lifecycle::{setup_tracing, OrderingSystem};
use mealdrop::menu::StaticMenu;
use mealdrop::model::{OrderFilter, OrderStatus};
use mealdrop::payment::BasicPayment;
use mealdrop::store::JsonFileStore;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let store_path = std::env::var("MEALDROP_STORE").unwrap_or_else(|_| "users.json".to_string());
    info!(store = %store_path, "Starting ordering system");

    let system = OrderingSystem::new(Arc::new(JsonFileStore::new(&store_path)));

    // Hydrate the profile and open a cart for this session
    let profile_id = system
        .profile_client
        .create_profile("user@example.com")
        .await
        .map_err(|e| e.to_string())?;
    let cart_id = system
        .cart_client
        .create_cart()
        .await
        .map_err(|e| e.to_string())?;

    let menu = Arc::new(StaticMenu::new(["Burger", "Pizza", "Salad"]));
    let placement = OrderPlacement::new(
        system.cart_client.clone(),
        cart_id,
        system.profile_client.clone(),
        profile_id,
        menu,
    );

    let span = tracing::info_span!("ordering");
    let confirmation = async {
        info!("Filling the cart");
        system
            .cart_client
            .add_item(cart_id, "Pizza", Decimal::new(1299, 2), 1)
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_item(cart_id, "Burger", Decimal::new(899, 2), 2)
            .await
            .map_err(|e| e.to_string())?;

        let summary = placement
            .proceed_to_checkout()
            .await
            .map_err(|e| e.to_string())?;
        info!(
            items = summary.items.len(),
            total = %summary.totals.total,
            address = %summary.delivery_address,
            "Checkout summary"
        );

        placement
            .confirm_order(&BasicPayment)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        order_id = %confirmation.order_id,
        eta = %confirmation.estimated_delivery,
        "Order confirmed"
    );

    // The restaurant delivers, which opens the review gate
    let span = tracing::info_span!("aftercare");
    async {
        system
            .profile_client
            .update_order_status(profile_id, &confirmation.order_id, OrderStatus::Delivered)
            .await
            .map_err(|e| e.to_string())?;
        system
            .profile_client
            .add_order_review(profile_id, &confirmation.order_id, 5, "Arrived hot")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Already a favorite on repeat runs, which is fine
    match system
        .profile_client
        .add_favorite_restaurant(profile_id, "Pizza Palace")
        .await
    {
        Ok(()) => info!("Favorite added"),
        Err(e) => warn!(error = %e, "Favorite not added"),
    }

    let history = system
        .profile_client
        .view_order_history(profile_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(orders = history.len(), "Order history");

    let delivered = system
        .profile_client
        .filter_orders(
            profile_id,
            OrderFilter {
                status: Some(OrderStatus::Delivered),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(orders = delivered.len(), "Delivered so far");

    let favorites = system
        .profile_client
        .list_favorites(profile_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(?favorites, "Favorites");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
