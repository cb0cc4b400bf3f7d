//! JSON type checks used by the plan validator
//!
//! Plan documents are untyped `serde_json::Value` trees. Every rule in the
//! validator reduces to "if this key is present, its value must be of type T",
//! which is what `JsonType::matches` and `expect_field` express.

use serde_json::{Map, Value};

/// The JSON types a plan field can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    /// JSON string
    String,
    /// JSON number representable as i64 or u64 (no floats, no bools)
    Integer,
}

impl JsonType {
    /// Returns true if the value is exactly of this type.
    ///
    /// No coercion: `5.0` is not an integer, `"5"` is not an integer.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            JsonType::String => value.is_string(),
            JsonType::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

/// Outcome of checking an optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// Key not present; no constraint applies
    Absent,
    /// Key present with the expected type
    Matches,
    /// Key present with a different type
    Mismatch,
}

impl FieldCheck {
    /// True only for a present field of the wrong type.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, FieldCheck::Mismatch)
    }
}

/// Checks an optional field of an object against the expected type.
pub fn expect_field(obj: &Map<String, Value>, key: &str, expected: JsonType) -> FieldCheck {
    match obj.get(key) {
        None => FieldCheck::Absent,
        Some(value) if expected.matches(value) => FieldCheck::Matches,
        Some(_) => FieldCheck::Mismatch,
    }
}

/// Returns the field as an object if it is present and is one.
pub fn object_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

/// Returns the JSON type name for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
