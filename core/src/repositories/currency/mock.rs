//! Mock implementation of CurrencyRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Currency;
use crate::domain::value_objects::Visibility;
use crate::errors::{DomainError, Resource};

use super::trait_::CurrencyRepository;

/// Mock currency repository, keeps insertion order
pub struct MockCurrencyRepository {
    currencies: Arc<RwLock<Vec<Currency>>>,
}

impl MockCurrencyRepository {
    pub fn new() -> Self {
        Self {
            currencies: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored currencies
    pub async fn len(&self) -> usize {
        self.currencies.read().await.len()
    }
}

impl Default for MockCurrencyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CurrencyRepository for MockCurrencyRepository {
    async fn create(&self, currency: Currency) -> Result<Currency, DomainError> {
        self.currencies.write().await.push(currency.clone());
        Ok(currency)
    }

    async fn create_many(&self, currencies: Vec<Currency>) -> Result<Vec<Currency>, DomainError> {
        self.currencies.write().await.extend(currencies.iter().cloned());
        Ok(currencies)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Currency>, DomainError> {
        let currencies = self.currencies.read().await;
        Ok(currencies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Currency>, DomainError> {
        let mut all = self.currencies.read().await.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_status(&self, status: Visibility) -> Result<Vec<Currency>, DomainError> {
        let currencies = self.currencies.read().await;
        Ok(currencies
            .iter()
            .rev()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Option<Currency>, DomainError> {
        let currencies = self.currencies.read().await;
        Ok(currencies
            .iter()
            .find(|c| c.symbol.as_deref() == Some(symbol))
            .cloned())
    }

    async fn update(&self, currency: Currency) -> Result<Currency, DomainError> {
        let mut currencies = self.currencies.write().await;
        match currencies.iter_mut().find(|c| c.id == currency.id) {
            Some(existing) => {
                *existing = currency.clone();
                Ok(currency)
            }
            None => Err(DomainError::not_found(Resource::Currency)),
        }
    }

    async fn update_status_many(
        &self,
        ids: &[Uuid],
        status: Visibility,
    ) -> Result<u64, DomainError> {
        let mut currencies = self.currencies.write().await;
        let mut modified = 0;
        for currency in currencies.iter_mut().filter(|c| ids.contains(&c.id)) {
            if currency.status != status {
                currency.status = status;
                currency.updated_at = chrono::Utc::now();
                modified += 1;
            }
        }
        Ok(modified)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut currencies = self.currencies.write().await;
        let before = currencies.len();
        currencies.retain(|c| c.id != id);
        Ok(currencies.len() < before)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        let mut currencies = self.currencies.write().await;
        let before = currencies.len();
        currencies.retain(|c| !ids.contains(&c.id));
        Ok((before - currencies.len()) as u64)
    }
}
