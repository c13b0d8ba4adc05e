//! In-memory store adapter, used by tests and available as a throwaway
//! backend when no durability is wanted.

use crate::model::ProfileState;
use crate::store::{ProfileStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// A [`ProfileStore`] over a plain map. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, ProfileState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out every stored record. Test helper for asserting on
    /// write-through behavior.
    pub async fn snapshot(&self) -> HashMap<String, ProfileState> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn load(&self, user_id: &str) -> Result<Option<ProfileState>, StoreError> {
        Ok(self.records.lock().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &str, state: &ProfileState) -> Result<(), StoreError> {
        self.records
            .lock()
            .await
            .insert(user_id.to_string(), state.clone());
        Ok(())
    }
}
