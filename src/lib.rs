//! planstore - a validating, content-addressed HTTP store for JSON plan documents
//!
//! - `schema`: fixed-shape validation and canonical content digests
//! - `store`: key-value backends and the object-id keyed document adapter
//! - `http_server`: Axum routes for create / fetch / delete with ETags
//! - `observability`: structured logging and request counters
//! - `cli`: `serve`, `validate` and `digest` commands

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
