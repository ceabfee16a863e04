//! Request bodies and query strings of the HTTP surface
//!
//! Each DTO derives `Validate`. [`validate_request`] turns the collected
//! violations into the `{field: [messages]}` map returned with a 412.

pub mod currency;
pub mod language;
pub mod notification;
pub mod setting;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use setting_core::domain::value_objects::Visibility;
use setting_core::errors::{DomainError, ValidationError};

/// Show or hide several currencies or languages at once
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkVisibilityRequest {
    #[validate(required, length(min = 1))]
    pub ids: Option<Vec<String>>,

    #[validate(required)]
    pub status: Option<Visibility>,
}

/// Response of a bulk status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub modified_count: u64,
}

/// Run the derived validation rules of a request body
pub fn validate_request<T: Validate>(request: &T) -> Result<(), DomainError> {
    request
        .validate()
        .map_err(|errors| DomainError::Validation(into_field_messages(&errors)))
}

fn into_field_messages(errors: &ValidationErrors) -> ValidationError {
    let mut fields = BTreeMap::new();

    for (field, violations) in errors.field_errors() {
        let messages = violations
            .iter()
            .map(|violation| match (&violation.message, &*violation.code) {
                (Some(message), _) => message.to_string(),
                (None, "required") => format!("The {} field is required", field),
                (None, "length") => format!("The {} field must not be empty", field),
                (None, code) => format!("The {} field is invalid ({})", field, code),
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    ValidationError::Fields { fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        let request: BulkVisibilityRequest = serde_json::from_str("{}").unwrap();

        let error = validate_request(&request).unwrap_err();
        let DomainError::Validation(validation) = error else {
            panic!("expected a validation error");
        };
        let messages = validation.field_messages();

        assert_eq!(messages["ids"], vec!["The ids field is required"]);
        assert_eq!(messages["status"], vec!["The status field is required"]);
    }

    #[test]
    fn test_empty_id_list_is_rejected() {
        let request: BulkVisibilityRequest =
            serde_json::from_str(r#"{"ids": [], "status": "hide"}"#).unwrap();

        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn test_valid_bulk_request() {
        let request: BulkVisibilityRequest =
            serde_json::from_str(r#"{"ids": ["a"], "status": "hide"}"#).unwrap();

        assert!(validate_request(&request).is_ok());
    }
}
