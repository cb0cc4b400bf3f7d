//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request outcome counters for the schema API
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Documents validated and stored
    schemas_created: AtomicU64,
    /// POST bodies rejected (bad JSON or validation failure)
    schemas_rejected: AtomicU64,
    /// GETs answered with a body
    schemas_fetched: AtomicU64,
    /// GETs answered with 304
    schemas_not_modified: AtomicU64,
    /// Documents deleted
    schemas_deleted: AtomicU64,
    /// GET/DELETE misses, including objectId mismatches
    schemas_not_found: AtomicU64,
    /// Backend failures surfaced as 5xx
    store_errors: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_created(&self) {
        self.schemas_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.schemas_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_fetched(&self) {
        self.schemas_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_modified(&self) {
        self.schemas_not_modified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.schemas_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.schemas_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_errors(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            schemas_created: self.schemas_created.load(Ordering::Relaxed),
            schemas_rejected: self.schemas_rejected.load(Ordering::Relaxed),
            schemas_fetched: self.schemas_fetched.load(Ordering::Relaxed),
            schemas_not_modified: self.schemas_not_modified.load(Ordering::Relaxed),
            schemas_deleted: self.schemas_deleted.load(Ordering::Relaxed),
            schemas_not_found: self.schemas_not_found.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub schemas_created: u64,
    pub schemas_rejected: u64,
    pub schemas_fetched: u64,
    pub schemas_not_modified: u64,
    pub schemas_deleted: u64,
    pub schemas_not_found: u64,
    pub store_errors: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.schemas_created, 0);
        assert_eq!(snapshot.store_errors, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_created();
        registry.increment_created();
        registry.increment_rejected();
        registry.increment_fetched();
        registry.increment_not_modified();
        registry.increment_deleted();
        registry.increment_not_found();
        registry.increment_store_errors();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.schemas_created, 2);
        assert_eq!(snapshot.schemas_rejected, 1);
        assert_eq!(snapshot.schemas_fetched, 1);
        assert_eq!(snapshot.schemas_not_modified, 1);
        assert_eq!(snapshot.schemas_deleted, 1);
        assert_eq!(snapshot.schemas_not_found, 1);
        assert_eq!(snapshot.store_errors, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_fetched();

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(json["schemas_fetched"], 1);
        assert_eq!(json["schemas_deleted"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_created();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().schemas_created, 1000);
    }
}
