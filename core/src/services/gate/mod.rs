//! Request authorization against the token deny-list and the issuer public key
//!
//! The gate acquires one deny-list lease per check and releases it before the
//! token signature is verified.

mod deny_list;
#[cfg(any(test, feature = "mocks"))]
pub mod mock;
mod service;
mod verifier;

#[cfg(test)]
mod tests;

pub use deny_list::{DenyListLease, DenyListStore};
pub use service::{extract_bearer, AuthorizationGate, DEFAULT_DENY_LIST_PREFIX};
pub use verifier::{JwtVerifier, TokenVerifier};

#[cfg(any(test, feature = "mocks"))]
pub use mock::MockDenyList;
