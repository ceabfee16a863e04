//! Currency repository trait defining the interface for currency persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Currency;
use crate::domain::value_objects::Visibility;
use crate::errors::DomainError;

/// Repository trait for Currency persistence operations
#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    /// Insert a new currency
    async fn create(&self, currency: Currency) -> Result<Currency, DomainError>;

    /// Insert several currencies in one batch
    ///
    /// # Returns
    /// * `Ok(Vec<Currency>)` - The inserted currencies, in input order
    async fn create_many(&self, currencies: Vec<Currency>) -> Result<Vec<Currency>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Currency>, DomainError>;

    /// All currencies sorted by name ascending
    async fn find_all(&self) -> Result<Vec<Currency>, DomainError>;

    /// Currencies with the given status, newest first
    async fn find_by_status(&self, status: Visibility) -> Result<Vec<Currency>, DomainError>;

    /// First currency whose symbol matches exactly
    async fn find_by_symbol(&self, symbol: &str) -> Result<Option<Currency>, DomainError>;

    /// Persist every field of an existing currency
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No currency with this id
    async fn update(&self, currency: Currency) -> Result<Currency, DomainError>;

    /// Set the status of every listed currency
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of rows modified
    async fn update_status_many(&self, ids: &[Uuid], status: Visibility)
        -> Result<u64, DomainError>;

    /// # Returns
    /// * `Ok(true)` - The currency was deleted
    /// * `Ok(false)` - No currency with this id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError>;
}
