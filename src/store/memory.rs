//! # In-Memory Backend

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::KeyValueStore;
use super::errors::{StoreError, StoreResult};

/// Process-local key-value backend. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> StoreResult<usize> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.remove(key).is_some())
    }
}
