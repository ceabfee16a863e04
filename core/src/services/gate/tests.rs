//! Tests for the authorization gate

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use crate::errors::{DomainError, TokenError};
use crate::services::gate::{extract_bearer, AuthorizationGate, JwtVerifier, MockDenyList};

const SECRET: &[u8] = b"test-secret";

fn sign(exp_offset: i64) -> String {
    let claims = json!({ "_id": "user-1", "exp": Utc::now().timestamp() + exp_offset });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

fn gate(deny_list: &MockDenyList) -> AuthorizationGate {
    AuthorizationGate::new(
        Arc::new(deny_list.clone()),
        Arc::new(JwtVerifier::from_secret(SECRET, 0)),
    )
}

#[test]
fn test_extract_bearer() {
    assert_eq!(extract_bearer(Some("Bearer abc")), Ok("abc"));
    assert_eq!(extract_bearer(None), Err(TokenError::Missing));
    assert_eq!(extract_bearer(Some("Basic abc")), Err(TokenError::Missing));
    assert_eq!(extract_bearer(Some("Bearer ")), Err(TokenError::Missing));
    assert_eq!(extract_bearer(Some("Bearer")), Err(TokenError::Missing));
}

#[test]
fn test_bearer_scheme_is_case_insensitive() {
    assert_eq!(extract_bearer(Some("bearer abc")), Ok("abc"));
    assert_eq!(extract_bearer(Some("BEARER abc")), Ok("abc"));
    assert_eq!(extract_bearer(Some("BeArEr  abc ")), Ok("abc"));
    assert_eq!(extract_bearer(Some("Bearerabc")), Err(TokenError::Missing));
}

#[tokio::test]
async fn test_lowercase_scheme_is_authorized() {
    let deny_list = MockDenyList::new();
    let header = format!("bearer {}", sign(3600));

    let claims = gate(&deny_list).authorize(Some(&header)).await.unwrap();

    assert_eq!(claims.subject().as_deref(), Some("user-1"));
    assert_eq!(deny_list.released(), 1);
}

#[tokio::test]
async fn test_missing_token_skips_deny_list() {
    let deny_list = MockDenyList::new();

    let err = gate(&deny_list).authorize(None).await.unwrap_err();

    assert_eq!(err, DomainError::Token(TokenError::Missing));
    assert_eq!(deny_list.acquired(), 0);
}

#[tokio::test]
async fn test_valid_token_attaches_claims() {
    let deny_list = MockDenyList::new();
    let header = format!("Bearer {}", sign(3600));

    let claims = gate(&deny_list).authorize(Some(&header)).await.unwrap();

    assert_eq!(claims.subject().as_deref(), Some("user-1"));
    assert_eq!(deny_list.acquired(), 1);
    assert_eq!(deny_list.released(), 1);
}

#[tokio::test]
async fn test_deny_listed_token_is_rejected_and_lease_released_once() {
    let deny_list = MockDenyList::new();
    let token = sign(3600);
    deny_list.insert(format!("bl_{}", token)).await;

    let err = gate(&deny_list)
        .authorize(Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::Token(TokenError::Revoked));
    assert_eq!(deny_list.acquired(), 1);
    assert_eq!(deny_list.released(), 1);
}

#[tokio::test]
async fn test_invalid_tokens_release_lease_once() {
    let deny_list = MockDenyList::new();
    let gate = gate(&deny_list);

    let expired = gate
        .authorize(Some(&format!("Bearer {}", sign(-3600))))
        .await
        .unwrap_err();
    let garbage = gate.authorize(Some("Bearer not.a.jwt")).await.unwrap_err();

    assert_eq!(expired, DomainError::Token(TokenError::Expired));
    assert!(matches!(garbage, DomainError::Token(TokenError::Malformed { .. })));
    assert_eq!(deny_list.acquired(), 2);
    assert_eq!(deny_list.released(), 2);
}

#[tokio::test]
async fn test_wrong_signature() {
    let deny_list = MockDenyList::new();
    let claims = json!({ "sub": "u", "exp": Utc::now().timestamp() + 60 });
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"other")).unwrap();

    let err = gate(&deny_list)
        .authorize(Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::Token(TokenError::InvalidSignature));
}

#[tokio::test]
async fn test_deny_list_failures_are_internal() {
    let header = format!("Bearer {}", sign(3600));

    let unavailable = MockDenyList::unavailable();
    let err = gate(&unavailable).authorize(Some(&header)).await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));

    let failing = MockDenyList::failing_lookups();
    let err = gate(&failing).authorize(Some(&header)).await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
    assert_eq!(failing.released(), 1);
}

#[tokio::test]
async fn test_custom_prefix() {
    let deny_list = MockDenyList::new();
    let token = sign(3600);
    deny_list.insert(format!("revoked:{}", token)).await;

    let err = gate(&deny_list)
        .with_prefix("revoked:")
        .authorize(Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::Token(TokenError::Revoked));
}
