//! Language repository trait defining the interface for language persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Language;
use crate::domain::value_objects::Visibility;
use crate::errors::DomainError;

/// Repository trait for Language persistence operations
///
/// Language names are unique: inserting or renaming onto an existing name
/// fails with `DomainError::AlreadyExists`.
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    async fn create(&self, language: Language) -> Result<Language, DomainError>;

    async fn create_many(&self, languages: Vec<Language>) -> Result<Vec<Language>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Language>, DomainError>;

    /// All languages sorted by name ascending
    async fn find_all(&self) -> Result<Vec<Language>, DomainError>;

    /// Languages with the given status, newest first
    async fn find_by_status(&self, status: Visibility) -> Result<Vec<Language>, DomainError>;

    async fn update(&self, language: Language) -> Result<Language, DomainError>;

    /// # Returns
    /// * `Ok(u64)` - Number of rows modified
    async fn update_status_many(&self, ids: &[Uuid], status: Visibility)
        -> Result<u64, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError>;
}
