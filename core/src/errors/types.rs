//! Error types bridged into `DomainError`
//!
//! Messages shown to clients are configured in the presentation layer for
//! i18n support, the `Display` strings here are for logs.

use std::collections::BTreeMap;

use thiserror::Error;

/// Resource kinds owned by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Currency,
    Language,
    Setting,
    Notification,
}

impl Resource {
    /// Key used to look up the localized resource name
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Resource::Currency => "currency",
            Resource::Language => "language",
            Resource::Setting => "setting",
            Resource::Notification => "notification",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.i18n_key())
    }
}

/// Bearer token failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token not found")]
    Missing,

    #[error("Token revoked")]
    Revoked,

    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token: {reason}")]
    Malformed { reason: String },
}

impl TokenError {
    /// Every failure except a missing token is reported as an invalid token
    pub fn is_missing(&self) -> bool {
        matches!(self, TokenError::Missing)
    }
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field-level messages, keyed by field name
    #[error("Validation failed on {} field(s)", fields.len())]
    Fields { fields: BTreeMap<String, Vec<String>> },

    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten into the `{field: [messages]}` shape returned to clients
    pub fn field_messages(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            ValidationError::Fields { fields } => fields.clone(),
            ValidationError::RequiredField { field } => {
                BTreeMap::from([(field.clone(), vec![format!("The {} field is required", field)])])
            }
            ValidationError::InvalidValue { field, message } => {
                BTreeMap::from([(field.clone(), vec![message.clone()])])
            }
        }
    }
}
