//! # Store Backend Selection

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::backend::KeyValueStore;
use super::errors::StoreResult;
use super::local::LocalStore;
use super::memory::MemoryStore;

/// Which key-value backend to open, as written in the config file:
///
/// ```json
/// {"backend": "memory"}
/// {"backend": "local", "data_dir": "./data"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Process-local, lost on exit
    Memory,
    /// One file per key under `data_dir`
    Local { data_dir: PathBuf },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Memory
    }
}

impl StoreConfig {
    /// Backend name for logs
    pub fn name(&self) -> &'static str {
        match self {
            StoreConfig::Memory => "memory",
            StoreConfig::Local { .. } => "local",
        }
    }

    /// Open the configured backend
    pub fn open(&self) -> StoreResult<Arc<dyn KeyValueStore>> {
        match self {
            StoreConfig::Memory => Ok(Arc::new(MemoryStore::new())),
            StoreConfig::Local { data_dir } => Ok(Arc::new(LocalStore::open(data_dir.clone())?)),
        }
    }
}
