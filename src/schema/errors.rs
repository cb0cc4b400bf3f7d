//! Validation error types for plan documents
//!
//! Each variant corresponds to one rule of the plan shape. The `Display`
//! text is the message returned to clients in a 400 response, so it is part
//! of the HTTP contract and must stay stable.

use std::fmt;

use thiserror::Error;

/// Result type for plan validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Message reported for a document that passes every rule.
pub const VALID_MESSAGE: &str = "Schema is valid.";

/// Integer fields of a cost-share object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostShareField {
    Copay,
    Deductible,
}

impl CostShareField {
    /// All cost-share fields, in check order.
    pub const ALL: [CostShareField; 2] = [CostShareField::Copay, CostShareField::Deductible];

    /// JSON key of the field
    pub fn key(&self) -> &'static str {
        match self {
            CostShareField::Copay => "copay",
            CostShareField::Deductible => "deductible",
        }
    }
}

impl fmt::Display for CostShareField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// First rule violated by a plan document.
///
/// `found` carries the JSON type actually present (or `"missing"`), which is
/// logged but never part of the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid schema. The root object should be a dictionary.")]
    RootNotObject { found: &'static str },

    #[error("Invalid schema. 'planCostShares' should be a dictionary.")]
    PlanCostShares { found: &'static str },

    #[error("Invalid schema. '{field}' in 'planCostShares' should be an integer.")]
    PlanCostSharesAmount {
        field: CostShareField,
        found: &'static str,
    },

    #[error("Invalid schema. 'name' in 'linkedService' of element {element} should be a string.")]
    LinkedServiceName { element: usize, found: &'static str },

    #[error("Invalid schema. '{field}' in 'planserviceCostShares' of element {element} should be an integer.")]
    PlanserviceCostSharesAmount {
        element: usize,
        field: CostShareField,
        found: &'static str,
    },

    #[error("Invalid schema. 'planType' should be a string.")]
    PlanType { found: &'static str },

    #[error("Invalid schema. 'creationDate' should be in the format 'mm-dd-yyyy'.")]
    CreationDate { found: &'static str },

    #[error("Invalid schema. 'objectId' should be a string.")]
    ObjectId { found: &'static str },
}

impl ValidationError {
    /// Path of the offending field, e.g. `linkedPlanServices[2].linkedService.name`.
    ///
    /// Element indices are 1-based to line up with the message text.
    pub fn field_path(&self) -> String {
        match self {
            ValidationError::RootNotObject { .. } => "$root".to_string(),
            ValidationError::PlanCostShares { .. } => "planCostShares".to_string(),
            ValidationError::PlanCostSharesAmount { field, .. } => {
                format!("planCostShares.{}", field)
            }
            ValidationError::LinkedServiceName { element, .. } => {
                format!("linkedPlanServices[{}].linkedService.name", element)
            }
            ValidationError::PlanserviceCostSharesAmount { element, field, .. } => {
                format!("linkedPlanServices[{}].planserviceCostShares.{}", element, field)
            }
            ValidationError::PlanType { .. } => "planType".to_string(),
            ValidationError::CreationDate { .. } => "creationDate".to_string(),
            ValidationError::ObjectId { .. } => "objectId".to_string(),
        }
    }

    /// JSON type found at the offending path.
    pub fn found(&self) -> &'static str {
        match self {
            ValidationError::RootNotObject { found }
            | ValidationError::PlanCostShares { found }
            | ValidationError::PlanCostSharesAmount { found, .. }
            | ValidationError::LinkedServiceName { found, .. }
            | ValidationError::PlanserviceCostSharesAmount { found, .. }
            | ValidationError::PlanType { found }
            | ValidationError::CreationDate { found }
            | ValidationError::ObjectId { found } => found,
        }
    }
}
