//! Schema HTTP Routes
//!
//! Create, fetch and delete plan documents.
//!
//! - `POST /schema` validates, stores and returns the document's ETag
//! - `GET /schema/:object_id` returns the document, or 304 when
//!   `If-None-Match` carries the current ETag
//! - `DELETE /schema/:object_id` removes the document (bodyless 204)
//!
//! The ETag is the hex digest of the canonical document. Each request is a
//! single lookup-then-act sequence with no locking across store calls.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::schema::{digest, PlanValidator};
use crate::store::{DocumentStore, MemoryStore};

use super::errors::{ApiError, ApiResult};

/// Confirmation message for a stored document
pub const CREATED_MESSAGE: &str = "Schema created";

// ==================
// Shared State
// ==================

/// State shared across schema handlers
pub struct SchemaState {
    pub store: DocumentStore,
    pub validator: PlanValidator,
    pub metrics: Arc<MetricsRegistry>,
}

impl SchemaState {
    pub fn new(store: DocumentStore) -> Self {
        Self::with_metrics(store, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(store: DocumentStore, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store,
            validator: PlanValidator::new(),
            metrics,
        }
    }

    /// State over a fresh in-memory backend
    pub fn in_memory() -> Self {
        Self::new(DocumentStore::new(Arc::new(MemoryStore::new())))
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub schema: Value,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "objectId")]
    pub object_id: String,
}

// ==================
// Schema Routes
// ==================

/// Create schema routes
pub fn schema_routes(state: Arc<SchemaState>) -> Router {
    Router::new()
        .route("/schema", post(create_schema_handler))
        .route(
            "/schema/:object_id",
            get(get_schema_handler).delete(delete_schema_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn get_schema_handler(
    State(state): State<Arc<SchemaState>>,
    Path(object_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let result = fetch_schema(&state, &object_id, &headers);
    finish(&state, "get", &object_id, result)
}

async fn create_schema_handler(State(state): State<Arc<SchemaState>>, body: Bytes) -> Response {
    let result = create_schema(&state, &body);
    finish(&state, "create", "", result)
}

async fn delete_schema_handler(
    State(state): State<Arc<SchemaState>>,
    Path(object_id): Path<String>,
) -> Response {
    let result = delete_schema(&state, &object_id);
    finish(&state, "delete", &object_id, result)
}

// ==================
// Operations
// ==================

fn fetch_schema(state: &SchemaState, object_id: &str, headers: &HeaderMap) -> ApiResult<Response> {
    let document = load_matching(state, object_id)?;
    let etag = digest(&document);

    if etag_matches(headers, &etag) {
        state.metrics.increment_not_modified();
        log_event_with_fields(Event::SchemaNotModified, &[("object_id", object_id)]);
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    state.metrics.increment_fetched();
    log_event_with_fields(
        Event::SchemaFetched,
        &[("object_id", object_id), ("etag", etag.as_str())],
    );
    Ok((
        StatusCode::OK,
        [(header::ETAG, etag)],
        Json(SchemaResponse { schema: document }),
    )
        .into_response())
}

fn create_schema(state: &SchemaState, body: &[u8]) -> ApiResult<Response> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    state.validator.validate(&document)?;

    let etag = digest(&document);
    let object_id = document
        .get("objectId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    state.store.set(&object_id, &document)?;

    state.metrics.increment_created();
    log_event_with_fields(
        Event::SchemaCreated,
        &[("object_id", object_id.as_str()), ("etag", etag.as_str())],
    );

    Ok((
        StatusCode::CREATED,
        [(header::ETAG, etag)],
        Json(CreatedResponse {
            message: CREATED_MESSAGE.to_string(),
            object_id,
        }),
    )
        .into_response())
}

fn delete_schema(state: &SchemaState, object_id: &str) -> ApiResult<Response> {
    load_matching(state, object_id)?;

    // Gone between lookup and delete: report as a miss.
    if !state.store.delete(object_id)? {
        return Err(ApiError::NotFound);
    }

    state.metrics.increment_deleted();
    log_event_with_fields(Event::SchemaDeleted, &[("object_id", object_id)]);
    Ok(StatusCode::NO_CONTENT.into_response())
}

// ==================
// Helper Functions
// ==================

/// Loads the document for `object_id`, treating an embedded objectId that
/// differs from the requested one as a miss.
fn load_matching(state: &SchemaState, object_id: &str) -> ApiResult<Value> {
    let document = state.store.get(object_id)?.ok_or(ApiError::NotFound)?;

    match document.get("objectId").and_then(Value::as_str) {
        Some(embedded) if embedded == object_id => Ok(document),
        _ => Err(ApiError::NotFound),
    }
}

/// True when any `If-None-Match` entry names `etag`, or the header is `*`.
///
/// Entries may be quoted and may carry a weak `W/` prefix.
pub fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|tag| tag == "*" || strip_entity_tag(tag) == etag)
}

fn strip_entity_tag(tag: &str) -> &str {
    let tag = tag.strip_prefix("W/").unwrap_or(tag);
    tag.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(tag)
}

/// Records the outcome of a failed request and renders the response.
fn finish(state: &SchemaState, op: &str, object_id: &str, result: ApiResult<Response>) -> Response {
    let err = match result {
        Ok(response) => return response,
        Err(err) => err,
    };

    let detail = err.to_string();
    let field_path = match &err {
        ApiError::Validation(validation) => validation.field_path(),
        _ => String::new(),
    };
    let mut fields = vec![("op", op), ("object_id", object_id), ("reason", detail.as_str())];

    match &err {
        ApiError::NotFound => {
            state.metrics.increment_not_found();
            log_event_with_fields(Event::SchemaNotFound, &fields);
        }
        ApiError::Validation(validation) => {
            state.metrics.increment_rejected();
            fields.push(("field", field_path.as_str()));
            fields.push(("found", validation.found()));
            log_event_with_fields(Event::SchemaRejected, &fields);
        }
        ApiError::InvalidBody(_) => {
            state.metrics.increment_rejected();
            log_event_with_fields(Event::SchemaRejected, &fields);
        }
        ApiError::Store(_) => {
            state.metrics.increment_store_errors();
            log_event_with_fields(Event::StoreFailure, &fields);
        }
    }

    err.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_etag_matches_bare_and_quoted() {
        assert!(etag_matches(&headers_with("abc123"), "abc123"));
        assert!(etag_matches(&headers_with("\"abc123\""), "abc123"));
        assert!(etag_matches(&headers_with("W/\"abc123\""), "abc123"));
        assert!(!etag_matches(&headers_with("abc124"), "abc123"));
    }

    #[test]
    fn test_etag_matches_lists_and_wildcard() {
        assert!(etag_matches(&headers_with("\"zzz\", \"abc123\""), "abc123"));
        assert!(etag_matches(&headers_with("*"), "abc123"));
    }

    #[test]
    fn test_no_header_never_matches() {
        assert!(!etag_matches(&HeaderMap::new(), "abc123"));
    }

    #[test]
    fn test_state_creation() {
        let state = SchemaState::in_memory();
        assert_eq!(state.metrics.snapshot().schemas_created, 0);
        assert_eq!(state.store.key_for("x"), "json_schema:x");
    }
}
