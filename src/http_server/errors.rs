//! # Schema API Errors
//!
//! Error types for the schema endpoints. Every variant becomes a
//! `{"message": ...}` body; backend failures are reported generically so no
//! store details reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Message for GET/DELETE misses
pub const NOT_FOUND_MESSAGE: &str = "Schema not found";

/// Message for backend failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Result type for schema handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Schema API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body is not JSON
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// Document failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No document under the id, or its objectId does not match
    #[error("Schema not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Key-value backend failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Store(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// `{"message": ...}` body shared by errors and confirmations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageResponse::new(self.client_message()));
        (status, body).into_response()
    }
}
