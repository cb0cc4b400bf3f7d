//! # planstore HTTP Server Module
//!
//! Axum server exposing the plan schema API.
//!
//! # Endpoints
//!
//! - `/schema`, `/schema/:object_id` - Create, fetch, delete plan documents
//! - `/health` - Health check
//! - `/observability/*` - Health and request counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod schema_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use schema_routes::{schema_routes, SchemaState};
pub use server::HttpServer;
