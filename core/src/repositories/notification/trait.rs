//! Notification repository trait

use async_trait::async_trait;
use setting_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::Notification;
use crate::domain::value_objects::ReadStatus;
use crate::errors::DomainError;

/// Repository trait for Notification persistence operations
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, DomainError>;

    /// One page of notifications, newest first
    async fn find_page(&self, pagination: Pagination) -> Result<Vec<Notification>, DomainError>;

    async fn count_all(&self) -> Result<u64, DomainError>;

    async fn count_by_status(&self, status: ReadStatus) -> Result<u64, DomainError>;

    /// # Returns
    /// * `Ok(false)` - No notification with this id
    async fn update_status(&self, id: Uuid, status: ReadStatus) -> Result<bool, DomainError>;

    /// # Returns
    /// * `Ok(u64)` - Number of rows modified
    async fn update_status_many(&self, ids: &[Uuid], status: ReadStatus)
        -> Result<u64, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every notification referencing the product
    async fn delete_by_product_id(&self, product_id: &str) -> Result<u64, DomainError>;

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError>;
}
