//! Plan document validator
//!
//! Validation semantics:
//! - The document root must be an object
//! - `planCostShares` is required and must be an object
//! - Every other field is optional; when present it must have its declared type
//! - Rules are checked in a fixed order and the first violation is returned
//!
//! Not enforced:
//! - Undeclared fields (extra keys are accepted)
//! - Non-array `linkedPlanServices` (the per-element rules are skipped)
//! - Non-object elements of `linkedPlanServices` (they carry no checked keys)

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{CostShareField, ValidationError, ValidationResult};
use super::types::{expect_field, json_type_name, object_field, JsonType};

const PLAN_COST_SHARES: &str = "planCostShares";
const LINKED_PLAN_SERVICES: &str = "linkedPlanServices";
const LINKED_SERVICE: &str = "linkedService";
const PLANSERVICE_COST_SHARES: &str = "planserviceCostShares";
const PLAN_TYPE: &str = "planType";
const CREATION_DATE: &str = "creationDate";
const OBJECT_ID: &str = "objectId";

/// `mm-dd-yyyy`, whole string.
const CREATION_DATE_PATTERN: &str = r"^\d{2}-\d{2}-\d{4}$";

static CREATION_DATE_RE: OnceLock<Regex> = OnceLock::new();

fn creation_date_re() -> &'static Regex {
    CREATION_DATE_RE.get_or_init(|| {
        Regex::new(CREATION_DATE_PATTERN).expect("creation date pattern is a valid regex")
    })
}

/// Validator for the fixed plan document shape.
///
/// Stateless and deterministic; never mutates the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanValidator;

impl PlanValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a document, returning the first rule it violates.
    pub fn validate(&self, document: &Value) -> ValidationResult<()> {
        let root = document.as_object().ok_or(ValidationError::RootNotObject {
            found: json_type_name(document),
        })?;

        let cost_shares = match root.get(PLAN_COST_SHARES) {
            Some(Value::Object(obj)) => obj,
            Some(other) => {
                return Err(ValidationError::PlanCostShares {
                    found: json_type_name(other),
                })
            }
            None => return Err(ValidationError::PlanCostShares { found: "missing" }),
        };
        check_cost_shares(cost_shares).map_err(|(field, found)| {
            ValidationError::PlanCostSharesAmount { field, found }
        })?;

        if let Some(Value::Array(services)) = root.get(LINKED_PLAN_SERVICES) {
            for (index, service) in services.iter().enumerate() {
                if let Some(service) = service.as_object() {
                    check_linked_service(index + 1, service)?;
                }
            }
        }

        if expect_field(root, PLAN_TYPE, JsonType::String).is_mismatch() {
            return Err(ValidationError::PlanType {
                found: found_type(root, PLAN_TYPE),
            });
        }

        if let Some(date) = root.get(CREATION_DATE) {
            let well_formed = date
                .as_str()
                .map(|s| creation_date_re().is_match(s))
                .unwrap_or(false);
            if !well_formed {
                return Err(ValidationError::CreationDate {
                    found: json_type_name(date),
                });
            }
        }

        if expect_field(root, OBJECT_ID, JsonType::String).is_mismatch() {
            return Err(ValidationError::ObjectId {
                found: found_type(root, OBJECT_ID),
            });
        }

        Ok(())
    }

    /// Convenience form returning `(valid, message)`.
    pub fn check(&self, document: &Value) -> (bool, String) {
        match self.validate(document) {
            Ok(()) => (true, super::errors::VALID_MESSAGE.to_string()),
            Err(e) => (false, e.to_string()),
        }
    }
}

/// Validates a document with the default validator.
pub fn validate_plan(document: &Value) -> ValidationResult<()> {
    PlanValidator::new().validate(document)
}

/// Checks `copay` then `deductible`; returns the first non-integer field.
fn check_cost_shares(
    obj: &Map<String, Value>,
) -> Result<(), (CostShareField, &'static str)> {
    for field in CostShareField::ALL {
        if expect_field(obj, field.key(), JsonType::Integer).is_mismatch() {
            return Err((field, found_type(obj, field.key())));
        }
    }
    Ok(())
}

/// Checks one `linkedPlanServices` element. `element` is 1-based.
fn check_linked_service(element: usize, service: &Map<String, Value>) -> ValidationResult<()> {
    if let Some(linked) = object_field(service, LINKED_SERVICE) {
        if expect_field(linked, "name", JsonType::String).is_mismatch() {
            return Err(ValidationError::LinkedServiceName {
                element,
                found: found_type(linked, "name"),
            });
        }
    }

    if let Some(cost_shares) = object_field(service, PLANSERVICE_COST_SHARES) {
        check_cost_shares(cost_shares).map_err(|(field, found)| {
            ValidationError::PlanserviceCostSharesAmount {
                element,
                field,
                found,
            }
        })?;
    }

    Ok(())
}

fn found_type(obj: &Map<String, Value>, key: &str) -> &'static str {
    obj.get(key).map(json_type_name).unwrap_or("missing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::errors::VALID_MESSAGE;
    use serde_json::json;

    fn valid_plan() -> Value {
        json!({
            "objectId": "12xvxc345ssdsds-508",
            "planCostShares": {"copay": 23, "deductible": 2000},
            "linkedPlanServices": [
                {
                    "linkedService": {"name": "Yearly physical"},
                    "planserviceCostShares": {"copay": 0, "deductible": 10}
                },
                {
                    "linkedService": {"name": "well baby"},
                    "planserviceCostShares": {"copay": 175, "deductible": 10}
                }
            ],
            "planType": "inNetwork",
            "creationDate": "12-12-2017"
        })
    }

    #[test]
    fn test_valid_plan_passes() {
        assert_eq!(validate_plan(&valid_plan()), Ok(()));
    }

    #[test]
    fn test_minimal_plan_passes() {
        assert!(validate_plan(&json!({"planCostShares": {}})).is_ok());
    }

    #[test]
    fn test_root_must_be_object() {
        for doc in [json!([]), json!("plan"), json!(null), json!(42)] {
            let err = validate_plan(&doc).unwrap_err();
            assert!(matches!(err, ValidationError::RootNotObject { .. }));
        }
    }

    #[test]
    fn test_plan_cost_shares_required() {
        let err = validate_plan(&json!({"objectId": "a"})).unwrap_err();
        assert_eq!(err, ValidationError::PlanCostShares { found: "missing" });

        let err = validate_plan(&json!({"planCostShares": [1, 2]})).unwrap_err();
        assert_eq!(err, ValidationError::PlanCostShares { found: "array" });
        assert_eq!(
            err.to_string(),
            "Invalid schema. 'planCostShares' should be a dictionary."
        );
    }

    #[test]
    fn test_copay_checked_before_deductible() {
        let doc = json!({"planCostShares": {"copay": "x", "deductible": "y"}});
        let err = validate_plan(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid schema. 'copay' in 'planCostShares' should be an integer."
        );
    }

    #[test]
    fn test_float_copay_rejected() {
        let doc = json!({"planCostShares": {"copay": 12.5}});
        let err = validate_plan(&doc).unwrap_err();
        assert_eq!(err.found(), "float");
    }

    #[test]
    fn test_linked_service_errors_are_one_based() {
        let mut doc = valid_plan();
        doc["linkedPlanServices"][1]["linkedService"]["name"] = json!(7);
        let err = validate_plan(&doc).unwrap_err();
        assert!(err.to_string().contains("element 2"));

        let mut doc = valid_plan();
        doc["linkedPlanServices"][0]["planserviceCostShares"]["deductible"] = json!("ten");
        let err = validate_plan(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid schema. 'deductible' in 'planserviceCostShares' of element 1 should be an integer."
        );
    }

    #[test]
    fn test_linked_plan_services_not_array_is_ignored() {
        let doc = json!({"planCostShares": {}, "linkedPlanServices": "nope"});
        assert!(validate_plan(&doc).is_ok());
    }

    #[test]
    fn test_linked_service_wrong_container_types_ignored() {
        let doc = json!({
            "planCostShares": {},
            "linkedPlanServices": [
                {"linkedService": "not an object", "planserviceCostShares": 5},
                "loose string",
                {"linkedService": {}}
            ]
        });
        assert!(validate_plan(&doc).is_ok());
    }

    #[test]
    fn test_plan_type_must_be_string() {
        let doc = json!({"planCostShares": {}, "planType": 1});
        let err = validate_plan(&doc).unwrap_err();
        assert_eq!(err, ValidationError::PlanType { found: "int" });
    }

    #[test]
    fn test_creation_date_format() {
        let ok = json!({"planCostShares": {}, "creationDate": "01-15-2024"});
        assert!(validate_plan(&ok).is_ok());

        for bad in [json!("13-99"), json!("2024-01-15"), json!("01-15-2024x"), json!(20240115)] {
            let doc = json!({"planCostShares": {}, "creationDate": bad});
            let err = validate_plan(&doc).unwrap_err();
            assert!(matches!(err, ValidationError::CreationDate { .. }));
        }
    }

    #[test]
    fn test_object_id_must_be_string() {
        let doc = json!({"planCostShares": {}, "objectId": 99});
        let err = validate_plan(&doc).unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema. 'objectId' should be a string.");
    }

    #[test]
    fn test_rule_order_plan_cost_shares_before_plan_type() {
        let doc = json!({"planType": 5});
        let err = validate_plan(&doc).unwrap_err();
        assert!(matches!(err, ValidationError::PlanCostShares { .. }));
    }

    #[test]
    fn test_check_returns_message_pair() {
        let validator = PlanValidator::new();
        assert_eq!(validator.check(&valid_plan()), (true, VALID_MESSAGE.to_string()));

        let (valid, message) = validator.check(&json!([]));
        assert!(!valid);
        assert!(message.contains("root object"));
    }
}
