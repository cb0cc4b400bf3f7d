//! # HTTP Server
//!
//! Combines the schema and observability routers into one Axum app.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::DocumentStore;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::schema_routes::{schema_routes, SchemaState};

/// HTTP server for the plan schema API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given document store
    pub fn new(config: HttpServerConfig, store: DocumentStore) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let state = Arc::new(SchemaState::with_metrics(store, metrics.clone()));
        let router = Self::build_router(&config, state, metrics);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        state: Arc<SchemaState>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(schema_routes(state))
            .nest("/observability", observability_routes(metrics))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await
    }
}
