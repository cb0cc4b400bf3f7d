//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Request outcome counters
//! - Typed lifecycle and request events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on request handling
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use planstore::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::SchemaCreated, &[("object_id", "plan-1")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Default severity for an event
fn severity_for(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::StoreFailure => Severity::Error,
        Event::SchemaRejected | Event::SchemaNotFound => Severity::Warn,
        _ => Severity::Info,
    }
}

/// Log an event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severities() {
        assert_eq!(severity_for(Event::BootFailed), Severity::Fatal);
        assert_eq!(severity_for(Event::StoreFailure), Severity::Error);
        assert_eq!(severity_for(Event::SchemaRejected), Severity::Warn);
        assert_eq!(severity_for(Event::SchemaCreated), Severity::Info);
    }

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "54321")]);
    }
}
