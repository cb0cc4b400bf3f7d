//! # Key-Value Store Backend Trait

use super::errors::StoreResult;

/// Opaque key-value service the document store sits on.
///
/// Each call is expected to be atomic on its own. Callers never combine
/// calls into transactions.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; returns false if it was not present
    fn delete(&self, key: &str) -> StoreResult<bool>;
}
