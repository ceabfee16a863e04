//! Mock implementation of SettingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Setting;
use crate::errors::{DomainError, Resource};

use super::trait_::SettingRepository;

/// Mock setting repository keyed by name
pub struct MockSettingRepository {
    settings: Arc<RwLock<HashMap<String, Setting>>>,
}

impl MockSettingRepository {
    pub fn new() -> Self {
        Self {
            settings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockSettingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingRepository for MockSettingRepository {
    async fn create(&self, setting: Setting) -> Result<Setting, DomainError> {
        let mut settings = self.settings.write().await;
        if settings.contains_key(&setting.name) {
            return Err(DomainError::AlreadyExists {
                resource: Resource::Setting,
            });
        }
        settings.insert(setting.name.clone(), setting.clone());
        Ok(setting)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Setting>, DomainError> {
        Ok(self.settings.read().await.get(name).cloned())
    }

    async fn update(&self, setting: Setting) -> Result<Setting, DomainError> {
        let mut settings = self.settings.write().await;
        match settings.get_mut(&setting.name) {
            Some(existing) => {
                *existing = setting.clone();
                Ok(setting)
            }
            None => Err(DomainError::not_found(Resource::Setting)),
        }
    }
}
