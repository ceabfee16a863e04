//! Setting repository trait

use async_trait::async_trait;

use crate::domain::entities::Setting;
use crate::errors::DomainError;

/// Repository trait for named setting documents
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Insert a new document
    ///
    /// # Returns
    /// * `Err(DomainError::AlreadyExists)` - A document with this name exists
    async fn create(&self, setting: Setting) -> Result<Setting, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Setting>, DomainError>;

    /// Replace the document of an existing setting
    async fn update(&self, setting: Setting) -> Result<Setting, DomainError>;
}
