//! Authorization gate applied to every resource request

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::deny_list::DenyListStore;
use super::verifier::TokenVerifier;

pub const DEFAULT_DENY_LIST_PREFIX: &str = "bl_";

const BEARER_SCHEME: &str = "bearer ";

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme name is matched case-insensitively (RFC 7235).
pub fn extract_bearer(header: Option<&str>) -> Result<&str, TokenError> {
    header
        .map(str::trim_start)
        .filter(|value| {
            value
                .get(..BEARER_SCHEME.len())
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case(BEARER_SCHEME))
        })
        .map(|value| value[BEARER_SCHEME.len()..].trim())
        .filter(|token| !token.is_empty())
        .ok_or(TokenError::Missing)
}

pub struct AuthorizationGate {
    deny_list: Arc<dyn DenyListStore>,
    verifier: Arc<dyn TokenVerifier>,
    prefix: String,
}

impl AuthorizationGate {
    pub fn new(deny_list: Arc<dyn DenyListStore>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            deny_list,
            verifier,
            prefix: DEFAULT_DENY_LIST_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Authorize a request from its raw `Authorization` header value
    ///
    /// # Returns
    /// * `Ok(Claims)` - Token present, not revoked, correctly signed and unexpired
    /// * `Err(DomainError::Token(TokenError::Missing))` - No bearer token
    /// * `Err(DomainError::Token(_))` - Revoked or failed verification
    /// * `Err(DomainError::Internal)` - Deny-list unavailable
    pub async fn authorize(&self, authorization: Option<&str>) -> DomainResult<Claims> {
        let token = extract_bearer(authorization)?;

        if self.is_revoked(token).await? {
            debug!("Rejected deny-listed token");
            return Err(TokenError::Revoked.into());
        }

        self.verifier.verify(token).map_err(|e| {
            debug!(error = %e, "Token verification failed");
            DomainError::from(e)
        })
    }

    async fn is_revoked(&self, token: &str) -> DomainResult<bool> {
        let mut lease = self.deny_list.acquire().await.map_err(|e| {
            warn!(error = %e, "Failed to acquire deny-list connection");
            DomainError::internal(format!("deny-list unavailable: {}", e))
        })?;

        let key = format!("{}{}", self.prefix, token);
        let lookup = lease.get(&key).await;
        lease.release();

        match lookup {
            Ok(entry) => Ok(entry.is_some()),
            Err(e) => {
                warn!(error = %e, "Deny-list lookup failed");
                Err(DomainError::internal(format!("deny-list lookup failed: {}", e)))
            }
        }
    }
}
