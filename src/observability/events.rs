//! Observable events for planstore
//!
//! Every log line carries exactly one of these as its `event` field.
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Store backend opened
    StoreOpened,
    /// HTTP listener bound, ready to serve
    Serving,
    /// Startup failed
    BootFailed,

    // Schema requests
    /// Document validated and stored
    SchemaCreated,
    /// Document rejected (bad JSON or failed validation)
    SchemaRejected,
    /// Document returned with a body
    SchemaFetched,
    /// Conditional GET matched the current digest
    SchemaNotModified,
    /// Document removed
    SchemaDeleted,
    /// Lookup missed, or the stored objectId did not match
    SchemaNotFound,

    // Failures
    /// Key-value backend failed
    StoreFailure,
}

impl Event {
    /// Returns the event name as it appears in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "PLANSTORE_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::Serving => "PLANSTORE_SERVING",
            Event::BootFailed => "PLANSTORE_STARTUP_FAILED",
            Event::SchemaCreated => "SCHEMA_CREATED",
            Event::SchemaRejected => "SCHEMA_REJECTED",
            Event::SchemaFetched => "SCHEMA_FETCHED",
            Event::SchemaNotModified => "SCHEMA_NOT_MODIFIED",
            Event::SchemaDeleted => "SCHEMA_DELETED",
            Event::SchemaNotFound => "SCHEMA_NOT_FOUND",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }

    /// Whether the process cannot continue after this event
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
