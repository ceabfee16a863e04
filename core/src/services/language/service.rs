use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Language, LanguageUpdate, NewLanguage};
use crate::domain::value_objects::Visibility;
use crate::errors::{parse_id, parse_ids, DomainError, DomainResult, Resource, ValidationError};
use crate::repositories::LanguageRepository;

/// Language management service
pub struct LanguageService {
    repository: Arc<dyn LanguageRepository>,
}

impl LanguageService {
    pub fn new(repository: Arc<dyn LanguageRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: &str) -> DomainResult<Language> {
        let id = parse_id(Resource::Language, id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Language))
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Language>> {
        self.repository.find_all().await
    }

    pub async fn list_showing(&self) -> DomainResult<Vec<Language>> {
        self.repository.find_by_status(Visibility::Show).await
    }

    /// # Returns
    /// * `Err(DomainError::AlreadyExists)` - The name is taken
    pub async fn create(&self, input: NewLanguage) -> DomainResult<Language> {
        ensure_required(&input)?;
        let language = self.repository.create(Language::new(input)).await?;
        info!(language_id = %language.id, "Language created");
        Ok(language)
    }

    pub async fn create_many(&self, inputs: Vec<NewLanguage>) -> DomainResult<Vec<Language>> {
        for input in &inputs {
            ensure_required(input)?;
        }
        let languages = inputs.into_iter().map(Language::new).collect();
        self.repository.create_many(languages).await
    }

    pub async fn update(&self, id: &str, update: LanguageUpdate) -> DomainResult<Language> {
        let mut language = self.get(id).await?;
        language.apply(update);
        self.repository.update(language).await
    }

    pub async fn update_status(&self, id: &str, status: Visibility) -> DomainResult<Language> {
        let mut language = self.get(id).await?;
        language.set_status(status);
        self.repository.update(language).await
    }

    pub async fn update_many_status(&self, ids: &[String], status: Visibility) -> DomainResult<u64> {
        let ids = parse_ids(Resource::Language, ids)?;
        self.repository.update_status_many(&ids, status).await
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(Resource::Language, id)?;
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(Resource::Language));
        }
        info!(language_id = %id, "Language deleted");
        Ok(())
    }

    pub async fn delete_many(&self, ids: &[String]) -> DomainResult<u64> {
        let ids = parse_ids(Resource::Language, ids)?;
        match self.repository.delete_many(&ids).await? {
            0 => Err(DomainError::not_found(Resource::Language)),
            deleted => Ok(deleted),
        }
    }
}

fn ensure_required(input: &NewLanguage) -> DomainResult<()> {
    for (field, value) in [("name", &input.name), ("iso_code", &input.iso_code)] {
        if value.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: field.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
