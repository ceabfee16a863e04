//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{Resource, TokenError, ValidationError};

use thiserror::Error;
use uuid::Uuid;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: Resource },

    #[error("Invalid {resource} identifier: {id}")]
    InvalidIdentifier { resource: Resource, id: String },

    #[error("Resource already exists: {resource}")]
    AlreadyExists { resource: Resource },

    #[error("Unsupported locale: {code}")]
    UnsupportedLocale { code: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: Resource) -> Self {
        DomainError::NotFound { resource }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Parse a path identifier owned by this service
pub fn parse_id(resource: Resource, raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::InvalidIdentifier {
        resource,
        id: raw.to_string(),
    })
}

/// Parse a list of identifiers, failing on the first invalid one
pub fn parse_ids<I, S>(resource: Resource, raw: I) -> DomainResult<Vec<Uuid>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|id| parse_id(resource, id.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(Resource::Currency, &id.to_string()).unwrap(), id);

        let err = parse_id(Resource::Currency, "not-a-uuid").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidIdentifier { resource: Resource::Currency, .. }
        ));
    }

    #[test]
    fn test_parse_ids_stops_on_invalid() {
        let ok = Uuid::new_v4().to_string();
        let result = parse_ids(Resource::Language, vec![ok.as_str(), "42"]);

        assert!(matches!(
            result,
            Err(DomainError::InvalidIdentifier { ref id, .. }) if id == "42"
        ));
    }

    #[test]
    fn test_bridges() {
        let err: DomainError = TokenError::Revoked.into();
        assert!(matches!(err, DomainError::Token(TokenError::Revoked)));

        let err: DomainError = ValidationError::RequiredField {
            field: "name".to_string(),
        }
        .into();
        let fields = match err {
            DomainError::Validation(v) => v.field_messages(),
            _ => unreachable!(),
        };
        assert!(fields.contains_key("name"));
    }
}
