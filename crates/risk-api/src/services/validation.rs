//! Validation rules for risk creation payloads.
//!
//! Every rule is evaluated so that a single response reports all failures.
//! Only input that passes every rule is turned into a [`NewRisk`].

use std::fmt;

use crate::models::{CreateRiskRequest, NewRisk, RiskState};

/// The rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Field is absent, `null` or empty.
    Required,
    /// Field is not one of the allowed values.
    OneOf,
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: ValidationRule,
    pub message: String,
}

impl FieldViolation {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            rule: ValidationRule::Required,
            message: format!("{field} is required"),
        }
    }

    fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self {
            field,
            rule: ValidationRule::OneOf,
            message: format!(
                "{field} '{value}' must be one of [{}]",
                allowed.join(" ")
            ),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// All rule failures for one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Names of the failed fields, in rule order.
    #[cfg(test)]
    pub(crate) fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Check a decoded payload and build the validated record.
pub fn validate_create_request(request: &CreateRiskRequest) -> Result<NewRisk, ValidationErrors> {
    let mut violations = Vec::new();

    let state = match non_empty(request.state.as_deref()) {
        None => {
            violations.push(FieldViolation::required("state"));
            None
        }
        Some(raw) => match raw.parse::<RiskState>() {
            Ok(state) => Some(state),
            Err(_) => {
                let allowed = RiskState::ALL.map(|s| s.as_str());
                violations.push(FieldViolation::one_of("state", raw, &allowed));
                None
            }
        },
    };

    let title = non_empty(request.title.as_deref());
    if title.is_none() {
        violations.push(FieldViolation::required("title"));
    }

    let description = non_empty(request.description.as_deref());
    if description.is_none() {
        violations.push(FieldViolation::required("description"));
    }

    match (state, title, description) {
        (Some(state), Some(title), Some(description)) => Ok(NewRisk {
            state,
            title: title.to_string(),
            description: description.to_string(),
        }),
        _ => Err(ValidationErrors(violations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(state: Option<&str>, title: Option<&str>, description: Option<&str>) -> CreateRiskRequest {
        CreateRiskRequest {
            state: state.map(str::to_string),
            title: title.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_for_every_state() {
        for state in RiskState::ALL {
            let new_risk =
                validate_create_request(&request(Some(state.as_str()), Some("T"), Some("D")))
                    .unwrap();
            assert_eq!(new_risk.state, state);
            assert_eq!(new_risk.title, "T");
            assert_eq!(new_risk.description, "D");
        }
    }

    #[test]
    fn test_unknown_state_rejected() {
        let errors = validate_create_request(&request(Some("resolved"), Some("T"), Some("D")))
            .unwrap_err();
        assert_eq!(errors.fields(), vec!["state"]);
        assert_eq!(errors.violations()[0].rule, ValidationRule::OneOf);
        assert_eq!(
            errors.to_string(),
            "validation failed: state 'resolved' must be one of [open closed accepted investigating]"
        );
    }

    #[test]
    fn test_state_match_is_case_sensitive() {
        let errors =
            validate_create_request(&request(Some("Open"), Some("T"), Some("D"))).unwrap_err();
        assert_eq!(errors.fields(), vec!["state"]);
    }

    #[test]
    fn test_empty_state_is_required_violation() {
        let errors = validate_create_request(&request(Some(""), Some("T"), Some("D"))).unwrap_err();
        assert_eq!(errors.violations()[0].rule, ValidationRule::Required);
    }

    #[test]
    fn test_missing_title_and_description() {
        let errors = validate_create_request(&request(Some("open"), None, Some(""))).unwrap_err();
        assert_eq!(errors.fields(), vec!["title", "description"]);
        assert_eq!(
            errors.to_string(),
            "validation failed: title is required; description is required"
        );
    }

    #[test]
    fn test_all_fields_reported_together() {
        let errors = validate_create_request(&CreateRiskRequest::default()).unwrap_err();
        assert_eq!(errors.fields(), vec!["state", "title", "description"]);
        assert!(errors
            .violations()
            .iter()
            .all(|v| v.rule == ValidationRule::Required));
    }
}
