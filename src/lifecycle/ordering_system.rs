use crate::clients::{CartClient, ProfileClient};
use crate::store::ProfileStore;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the ordering system's actors.
///
/// `OrderingSystem` is responsible for:
/// - **Lifecycle management**: starting and stopping both actors
/// - **Dependency wiring**: handing the profile store to the profile actor
///
/// # Architecture
///
/// Two actors run for the lifetime of the system:
/// - **Cart actor**: session-scoped carts and their pricing
/// - **Profile actor**: per-user order ledger, favorites, reviews, address
///
/// # Example
///
/// ```ignore
/// let system = OrderingSystem::new(Arc::new(MemoryStore::new()));
///
/// let profile_id = system.profile_client.create_profile("user@example.com").await?;
/// let cart_id = system.cart_client.create_cart().await?;
///
/// // ... order things ...
///
/// system.shutdown().await?;
/// ```
pub struct OrderingSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Client for interacting with the Profile actor
    pub profile_client: ProfileClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderingSystem {
    /// Creates and starts the system: both actors spawned, the profile actor
    /// wired to the given store.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let (profile_actor, profile_client) = crate::profile_actor::new();

        // The cart has no dependencies (Context = ()); the profile actor
        // receives the store as its context.
        let cart_handle = tokio::spawn(cart_actor.run(()));
        let profile_handle = tokio::spawn(profile_actor.run(store));

        Self {
            cart_client: CartClient::new(cart_client),
            profile_client: ProfileClient::new(profile_client),
            handles: vec![cart_handle, profile_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue and exits its loop. Any in-flight store write completes before
    /// the profile actor stops.
    ///
    /// # Returns
    /// `Err` if an actor task panicked instead of exiting cleanly.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_client);
        drop(self.profile_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
