//! Storage and validation services for the risks API.

pub mod risk_store;
pub mod validation;

pub use risk_store::RiskStore;
pub use validation::{validate_create_request, FieldViolation, ValidationErrors, ValidationRule};
