//! Plan schema subsystem
//!
//! Validation and content hashing for plan documents. Both are pure: no I/O,
//! no shared state.
//!
//! # Design Principles
//!
//! - Fixed shape, hardcoded field rules
//! - First violation wins, checked in a fixed order
//! - No coercion (`5.0` is not an integer)
//! - One canonical serialization for hashing and persistence

mod digest;
mod errors;
mod types;
mod validator;

pub use digest::{canonical_json, digest, DIGEST_HEX_LEN};
pub use errors::{CostShareField, ValidationError, ValidationResult, VALID_MESSAGE};
pub use types::{expect_field, json_type_name, FieldCheck, JsonType};
pub use validator::{validate_plan, PlanValidator};
