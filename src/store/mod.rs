//! # Document Store
//!
//! Persistence for plan documents over an opaque key-value service.
//!
//! - `KeyValueStore`: the get/set/delete contract a backend must provide
//! - `MemoryStore`, `LocalStore`: shipped backends
//! - `DocumentStore`: object-id keyed adapter that owns the key format
//! - `StoreConfig`: backend selection from the config file

mod backend;
mod config;
mod documents;
mod errors;
mod local;
mod memory;

pub use backend::KeyValueStore;
pub use config::StoreConfig;
pub use documents::{DocumentStore, DEFAULT_KEY_PREFIX};
pub use errors::{StoreError, StoreResult};
pub use local::LocalStore;
pub use memory::MemoryStore;
