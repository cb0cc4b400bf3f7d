//! Canonical serialization and content digest for plan documents
//!
//! The digest doubles as the ETag. It must be identical whether it is
//! computed from the POST body or from the document read back from the
//! store, so both paths go through `canonical_json`:
//! - compact JSON, no insignificant whitespace
//! - object keys sorted recursively
//! - array order preserved

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Length of a hex-encoded digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Returns the canonical textual form of a document.
///
/// This is also the form persisted in the key-value store.
pub fn canonical_json(document: &Value) -> String {
    normalize(document).to_string()
}

/// Returns the lowercase hex SHA-256 of the canonical form.
pub fn digest(document: &Value) -> String {
    let hash = Sha256::digest(canonical_json(document).as_bytes());
    format!("{hash:x}")
}

fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let ordered: BTreeMap<&String, Value> =
                object.iter().map(|(k, v)| (k, normalize(v))).collect();
            let mut out = Map::new();
            for (key, value) in ordered {
                out.insert(key.clone(), value);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        _ => value.clone(),
    }
}
