//! Persistence boundary for profile state.
//!
//! The profile actor owns its state in memory and treats the store as a
//! write-through mirror: [`ProfileStore::load`] hydrates the aggregate once,
//! [`ProfileStore::save`] overwrites the user's full record after every
//! mutation. Nothing else reads or writes through this trait, so adapters
//! stay small: an in-memory map for tests and a JSON file for the demo.

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::model::ProfileState;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from a store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded.
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read/write contract for one user's persisted profile record.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetches the stored record for `user_id`, or `None` for a user the
    /// store has never seen.
    async fn load(&self, user_id: &str) -> Result<Option<ProfileState>, StoreError>;

    /// Overwrites the stored record for `user_id` with the full state.
    async fn save(&self, user_id: &str, state: &ProfileState) -> Result<(), StoreError>;
}
