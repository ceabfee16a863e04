//! Mock implementation of LanguageRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Language;
use crate::domain::value_objects::Visibility;
use crate::errors::{DomainError, Resource};

use super::trait_::LanguageRepository;

/// Mock language repository enforcing unique names
pub struct MockLanguageRepository {
    languages: Arc<RwLock<Vec<Language>>>,
}

impl MockLanguageRepository {
    pub fn new() -> Self {
        Self {
            languages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockLanguageRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn name_taken(languages: &[Language], name: &str, except: Option<Uuid>) -> bool {
    languages
        .iter()
        .any(|l| l.name == name && Some(l.id) != except)
}

#[async_trait]
impl LanguageRepository for MockLanguageRepository {
    async fn create(&self, language: Language) -> Result<Language, DomainError> {
        let mut languages = self.languages.write().await;
        if name_taken(&languages, &language.name, None) {
            return Err(DomainError::AlreadyExists {
                resource: Resource::Language,
            });
        }
        languages.push(language.clone());
        Ok(language)
    }

    async fn create_many(&self, batch: Vec<Language>) -> Result<Vec<Language>, DomainError> {
        let mut languages = self.languages.write().await;
        for (i, language) in batch.iter().enumerate() {
            if name_taken(&languages, &language.name, None)
                || batch[..i].iter().any(|l| l.name == language.name)
            {
                return Err(DomainError::AlreadyExists {
                    resource: Resource::Language,
                });
            }
        }
        languages.extend(batch.iter().cloned());
        Ok(batch)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Language>, DomainError> {
        let languages = self.languages.read().await;
        Ok(languages.iter().find(|l| l.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Language>, DomainError> {
        let mut all = self.languages.read().await.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_status(&self, status: Visibility) -> Result<Vec<Language>, DomainError> {
        let languages = self.languages.read().await;
        Ok(languages
            .iter()
            .rev()
            .filter(|l| l.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, language: Language) -> Result<Language, DomainError> {
        let mut languages = self.languages.write().await;
        if name_taken(&languages, &language.name, Some(language.id)) {
            return Err(DomainError::AlreadyExists {
                resource: Resource::Language,
            });
        }
        match languages.iter_mut().find(|l| l.id == language.id) {
            Some(existing) => {
                *existing = language.clone();
                Ok(language)
            }
            None => Err(DomainError::not_found(Resource::Language)),
        }
    }

    async fn update_status_many(
        &self,
        ids: &[Uuid],
        status: Visibility,
    ) -> Result<u64, DomainError> {
        let mut languages = self.languages.write().await;
        let mut modified = 0;
        for language in languages.iter_mut().filter(|l| ids.contains(&l.id)) {
            if language.status != status {
                language.status = status;
                language.updated_at = chrono::Utc::now();
                modified += 1;
            }
        }
        Ok(modified)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut languages = self.languages.write().await;
        let before = languages.len();
        languages.retain(|l| l.id != id);
        Ok(languages.len() < before)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        let mut languages = self.languages.write().await;
        let before = languages.len();
        languages.retain(|l| !ids.contains(&l.id));
        Ok((before - languages.len()) as u64)
    }
}
