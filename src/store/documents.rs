//! # Plan Document Store
//!
//! Maps object ids onto backend keys (`<prefix><objectId>`) and documents
//! onto their canonical JSON text. Every call goes straight to the backend;
//! nothing is cached in process.

use std::sync::Arc;

use serde_json::Value;

use crate::schema::canonical_json;

use super::backend::KeyValueStore;
use super::errors::{StoreError, StoreResult};

/// Default key prefix for persisted plan documents
pub const DEFAULT_KEY_PREFIX: &str = "json_schema:";

/// Document-level adapter over a key-value backend
#[derive(Debug, Clone)]
pub struct DocumentStore {
    backend: Arc<dyn KeyValueStore>,
    key_prefix: String,
}

impl DocumentStore {
    /// Create an adapter with the default key prefix
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_prefix(backend, DEFAULT_KEY_PREFIX)
    }

    pub fn with_prefix(backend: Arc<dyn KeyValueStore>, key_prefix: impl Into<String>) -> Self {
        Self {
            backend,
            key_prefix: key_prefix.into(),
        }
    }

    /// Backend key for an object id
    pub fn key_for(&self, object_id: &str) -> String {
        format!("{}{}", self.key_prefix, object_id)
    }

    /// Fetch and parse the document stored for `object_id`.
    pub fn get(&self, object_id: &str) -> StoreResult<Option<Value>> {
        let key = self.key_for(object_id);
        let Some(text) = self.backend.get(&key)? else {
            return Ok(None);
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StoreError::Corrupted {
                key,
                reason: e.to_string(),
            })
    }

    /// Persist `document` under `object_id`, overwriting any previous one.
    pub fn set(&self, object_id: &str, document: &Value) -> StoreResult<()> {
        self.backend
            .set(&self.key_for(object_id), &canonical_json(document))
    }

    /// Remove the document for `object_id`; false if there was none.
    pub fn delete(&self, object_id: &str) -> StoreResult<bool> {
        self.backend.delete(&self.key_for(object_id))
    }
}
