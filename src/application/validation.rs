//! The pluggable validation engine.
//!
//! A [`Validator`] is an immutable value holding the candidate field value
//! and the field name; `validate` is stateless and produces zero or one
//! [`ErrorDescriptor`]. A [`ValidationComposite`] runs validators strictly in
//! declaration order and short-circuits on the first failure, so the error a
//! client sees is always the first declared rule that failed.

use serde_json::Value;

use crate::application::http::ErrorDescriptor;

#[derive(Debug, Clone)]
pub enum Validator {
    /// Fails when the value is absent or JSON null.
    Required {
        value: Option<Value>,
        field: Option<String>,
    },
    /// Fails additionally when the value is not a string or is empty.
    RequiredString {
        value: Option<Value>,
        field: Option<String>,
    },
    /// Fails additionally when the value is not a number.
    RequiredNumber {
        value: Option<Value>,
        field: Option<String>,
    },
    /// Fails when a value IS present, for server-assigned fields.
    ForbiddenField { value: Option<Value>, field: String },
    /// Fails when a present value is not in the enumeration. Absence is not
    /// a failure; the field is optional.
    AllowedValues {
        value: Option<Value>,
        allowed: &'static [&'static str],
        field: String,
    },
}

impl Validator {
    pub fn required(value: Option<&Value>, field: &str) -> Self {
        Validator::Required {
            value: value.cloned(),
            field: Some(field.to_owned()),
        }
    }

    pub fn required_string(value: Option<&Value>, field: &str) -> Self {
        Validator::RequiredString {
            value: value.cloned(),
            field: Some(field.to_owned()),
        }
    }

    pub fn required_number(value: Option<&Value>, field: &str) -> Self {
        Validator::RequiredNumber {
            value: value.cloned(),
            field: Some(field.to_owned()),
        }
    }

    pub fn forbidden(value: Option<&Value>, field: &str) -> Self {
        Validator::ForbiddenField {
            value: value.cloned(),
            field: field.to_owned(),
        }
    }

    pub fn allowed_values(
        value: Option<&Value>,
        allowed: &'static [&'static str],
        field: &str,
    ) -> Self {
        Validator::AllowedValues {
            value: value.cloned(),
            allowed,
            field: field.to_owned(),
        }
    }

    pub fn validate(&self) -> Option<ErrorDescriptor> {
        match self {
            Validator::Required { value, field } => {
                if is_absent(value) {
                    return Some(ErrorDescriptor::required_field(field.as_deref()));
                }
                None
            }
            Validator::RequiredString { value, field } => {
                match value.as_ref().and_then(Value::as_str) {
                    Some(string) if !string.is_empty() => None,
                    _ => Some(ErrorDescriptor::required_field(field.as_deref())),
                }
            }
            Validator::RequiredNumber { value, field } => {
                if is_absent(value) {
                    return Some(ErrorDescriptor::required_field(field.as_deref()));
                }
                if value.as_ref().is_some_and(is_numeric) {
                    return None;
                }
                let field = field.as_deref().unwrap_or("value");
                Some(ErrorDescriptor::validation(format!(
                    "The field {field} must be a valid number"
                )))
            }
            Validator::ForbiddenField { value, field } => {
                if is_absent(value) {
                    return None;
                }
                Some(ErrorDescriptor::validation(format!(
                    "The field {field} should not be provided"
                )))
            }
            Validator::AllowedValues {
                value,
                allowed,
                field,
            } => {
                if is_absent(value) {
                    return None;
                }
                let member = value
                    .as_ref()
                    .and_then(Value::as_str)
                    .is_some_and(|candidate| allowed.contains(&candidate));
                if member {
                    return None;
                }
                Some(ErrorDescriptor::validation(format!(
                    "The field {field} must be one of: {}",
                    allowed.join(", ")
                )))
            }
        }
    }
}

fn is_absent(value: &Option<Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn is_numeric(value: &Value) -> bool {
    // Numbers arrive as JSON numbers from the body and path, but query
    // parameters come through as strings.
    value.is_number()
        || value
            .as_str()
            .is_some_and(|string| string.parse::<f64>().is_ok())
}

/// Ordered list of validators evaluated with fail-fast semantics.
pub struct ValidationComposite {
    validators: Vec<Validator>,
}

impl ValidationComposite {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }

    /// Returns the first failure in declaration order, running no validator
    /// past it.
    pub fn validate(&self) -> Option<ErrorDescriptor> {
        self.validators.iter().find_map(Validator::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_required_rejects_absent_and_null() {
        assert!(Validator::required(None, "title").validate().is_some());
        assert!(Validator::required(Some(&Value::Null), "title")
            .validate()
            .is_some());
        assert!(Validator::required(Some(&json!("x")), "title")
            .validate()
            .is_none());
        assert!(Validator::required(Some(&json!(0)), "title")
            .validate()
            .is_none());
    }

    #[test]
    fn test_required_string_rejects_empty() {
        let error = Validator::required_string(Some(&json!("")), "title")
            .validate()
            .expect("empty string must fail");
        assert_eq!(error.kind, ErrorKind::RequiredField);
        assert_eq!(error.message, "The field title is required");

        assert!(Validator::required_string(None, "title").validate().is_some());
        assert!(Validator::required_string(Some(&json!(3)), "title")
            .validate()
            .is_some());
        assert!(Validator::required_string(Some(&json!("ok")), "title")
            .validate()
            .is_none());
    }

    #[test]
    fn test_required_number() {
        assert!(Validator::required_number(None, "id").validate().is_some());

        let error = Validator::required_number(Some(&json!("abc")), "id")
            .validate()
            .expect("non-numeric must fail");
        assert_eq!(error.message, "The field id must be a valid number");

        assert!(Validator::required_number(Some(&json!(7)), "id")
            .validate()
            .is_none());
        // Query and path parameters arrive as strings.
        assert!(Validator::required_number(Some(&json!("7")), "id")
            .validate()
            .is_none());
    }

    #[test]
    fn test_forbidden_field() {
        let error = Validator::forbidden(Some(&json!(99)), "id")
            .validate()
            .expect("present value must fail");
        assert_eq!(error.message, "The field id should not be provided");

        assert!(Validator::forbidden(None, "id").validate().is_none());
        assert!(Validator::forbidden(Some(&Value::Null), "id")
            .validate()
            .is_none());
    }

    #[test]
    fn test_allowed_values_is_optional() {
        const ALLOWED: &[&str] = &["pending", "completed"];

        assert!(Validator::allowed_values(None, ALLOWED, "status")
            .validate()
            .is_none());
        assert!(
            Validator::allowed_values(Some(&json!("pending")), ALLOWED, "status")
                .validate()
                .is_none()
        );

        let error = Validator::allowed_values(Some(&json!("archived")), ALLOWED, "status")
            .validate()
            .expect("unknown member must fail");
        assert_eq!(
            error.message,
            "The field status must be one of: pending, completed"
        );
        assert!(
            Validator::allowed_values(Some(&json!(1)), ALLOWED, "status")
                .validate()
                .is_some()
        );
    }

    #[test]
    fn test_composite_reports_first_failure_only() {
        let composite = ValidationComposite::new(vec![
            Validator::required_string(Some(&json!("")), "title"),
            Validator::required_string(Some(&json!("")), "description"),
        ]);

        let error = composite.validate().expect("both validators fail");
        assert_eq!(error.message, "The field title is required");
    }

    #[test]
    fn test_composite_runs_in_declaration_order() {
        let composite = ValidationComposite::new(vec![
            Validator::required_string(Some(&json!("present")), "title"),
            Validator::forbidden(Some(&json!(1)), "id"),
            Validator::required_string(None, "description"),
        ]);

        let error = composite.validate().expect("two validators fail");
        assert_eq!(error.message, "The field id should not be provided");
    }

    #[test]
    fn test_empty_composite_passes() {
        assert!(ValidationComposite::new(Vec::new()).validate().is_none());
    }
}
