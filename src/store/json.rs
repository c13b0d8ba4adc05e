//! JSON file store adapter.
//!
//! The file holds one JSON object keyed by user id. Each user record is
//! itself an object; the four profile keys (`delivery_address`, `favorites`,
//! `orders`, `reviews`) belong to this adapter, while any other keys in the
//! record (for example account credentials written by a different subsystem)
//! are carried through saves untouched. A missing file reads as an empty
//! document.

use crate::model::ProfileState;
use crate::store::{ProfileStore, StoreError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// A [`ProfileStore`] over a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_document(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn load(&self, user_id: &str) -> Result<Option<ProfileState>, StoreError> {
        let document = self.read_document().await?;
        match document.get(user_id) {
            // Missing profile keys inside the record fall back to defaults
            Some(record) => Ok(Some(serde_json::from_value(record.clone())?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user_id: &str, state: &ProfileState) -> Result<(), StoreError> {
        let mut document = self.read_document().await?;
        let entry = document
            .entry(user_id.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let (Some(record), Value::Object(fields)) =
            (entry.as_object_mut(), serde_json::to_value(state)?)
        {
            // Overwrite the profile keys, keep everything else
            for (key, value) in fields {
                record.insert(key, value);
            }
        }
        let bytes = serde_json::to_vec_pretty(&document)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_as_no_record() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("users.json"));

        let loaded = store
            .load("user@example.com")
            .await
            .expect("Failed to load");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("users.json"));

        let mut state = ProfileState::default();
        state.delivery_address = "42 Elm St".to_string();
        state.favorites.push("Pizza Palace".to_string());

        store
            .save("user@example.com", &state)
            .await
            .expect("Failed to save");
        let loaded = store
            .load("user@example.com")
            .await
            .expect("Failed to load")
            .expect("Expected a stored record");
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_foreign_keys_in_the_record_survive_saves() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("users.json");

        // A record written by the account subsystem, with extra keys
        let seeded = r#"{"user@example.com": {"password": "hunter2", "name": "Sam"}}"#;
        std::fs::write(&path, seeded).expect("Failed to seed file");

        let store = JsonFileStore::new(&path);
        store
            .save("user@example.com", &ProfileState::default())
            .await
            .expect("Failed to save");

        let raw = std::fs::read_to_string(&path).expect("Failed to read file");
        let document: Map<String, Value> =
            serde_json::from_str(&raw).expect("Failed to parse file");
        let record = document["user@example.com"]
            .as_object()
            .expect("Expected an object record");
        assert_eq!(record["password"], "hunter2");
        assert_eq!(record["name"], "Sam");
        assert!(record.contains_key("delivery_address"));
    }

    #[tokio::test]
    async fn test_partial_record_loads_with_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("users.json");

        let seeded = r#"{"user@example.com": {"password": "hunter2"}}"#;
        std::fs::write(&path, seeded).expect("Failed to seed file");

        let store = JsonFileStore::new(&path);
        let loaded = store
            .load("user@example.com")
            .await
            .expect("Failed to load")
            .expect("Expected a stored record");
        assert_eq!(loaded, ProfileState::default());
    }

    #[tokio::test]
    async fn test_two_users_do_not_clobber_each_other() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("users.json"));

        let mut first = ProfileState::default();
        first.favorites.push("Burger Barn".to_string());
        store.save("a@example.com", &first).await.expect("Failed to save");

        let second = ProfileState::default();
        store.save("b@example.com", &second).await.expect("Failed to save");

        let loaded = store
            .load("a@example.com")
            .await
            .expect("Failed to load")
            .expect("Expected a stored record");
        assert_eq!(loaded.favorites, ["Burger Barn"]);
    }
}
