//! Contract of the revoked-token store

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store of revoked tokens, keyed by `<prefix><token>`
#[async_trait]
pub trait DenyListStore: Send + Sync {
    /// Acquire a lease on a pooled connection
    ///
    /// # Returns
    /// * `Err(DomainError::Internal)` - No connection could be leased
    async fn acquire(&self) -> Result<Box<dyn DenyListLease>, DomainError>;
}

/// A leased deny-list connection.
///
/// Dropping the lease returns its connection to the pool, `release` makes
/// the hand-back explicit at the call site.
#[async_trait]
pub trait DenyListLease: Send {
    /// Raw value stored under `key`, `None` when the key is absent
    async fn get(&mut self, key: &str) -> Result<Option<String>, DomainError>;

    /// Return the connection to the pool
    fn release(self: Box<Self>);
}
