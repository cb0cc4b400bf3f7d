//! Observability HTTP Routes
//!
//! Health check and request counters.

use std::sync::Arc;

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;

use crate::observability::MetricsRegistry;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create observability routes (mounted under `/observability`)
pub fn observability_routes(metrics: Arc<MetricsRegistry>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

/// Health check route at the root
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(metrics): State<Arc<MetricsRegistry>>) -> impl IntoResponse {
    (StatusCode::OK, Json(metrics.snapshot()))
}
