use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Currency, CurrencyUpdate, NewCurrency};
use crate::domain::value_objects::Visibility;
use crate::errors::{parse_id, parse_ids, DomainError, DomainResult, Resource, ValidationError};
use crate::repositories::CurrencyRepository;

/// Currency management service
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepository>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn CurrencyRepository>) -> Self {
        Self { repository }
    }

    /// Fetch one currency by its path identifier
    pub async fn get(&self, id: &str) -> DomainResult<Currency> {
        let id = parse_id(Resource::Currency, id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Currency))
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Currency>> {
        self.repository.find_all().await
    }

    /// Currencies visible on the storefront, newest first
    pub async fn list_showing(&self) -> DomainResult<Vec<Currency>> {
        self.repository.find_by_status(Visibility::Show).await
    }

    pub async fn create(&self, input: NewCurrency) -> DomainResult<Currency> {
        ensure_name(&input.name)?;
        let currency = self.repository.create(Currency::new(input)).await?;
        info!(currency_id = %currency.id, "Currency created");
        Ok(currency)
    }

    pub async fn create_many(&self, inputs: Vec<NewCurrency>) -> DomainResult<Vec<Currency>> {
        for input in &inputs {
            ensure_name(&input.name)?;
        }
        let currencies = inputs.into_iter().map(Currency::new).collect();
        self.repository.create_many(currencies).await
    }

    pub async fn update(&self, id: &str, update: CurrencyUpdate) -> DomainResult<Currency> {
        if let Some(name) = &update.name {
            ensure_name(name)?;
        }
        let mut currency = self.get(id).await?;
        currency.apply(update);
        self.repository.update(currency).await
    }

    /// Show or hide a currency, live exchange rates follow the same value
    pub async fn update_status(&self, id: &str, status: Visibility) -> DomainResult<Currency> {
        let mut currency = self.get(id).await?;
        currency.set_status(status);
        self.repository.update(currency).await
    }

    pub async fn update_live_exchange_rates(
        &self,
        id: &str,
        live_exchange_rates: Visibility,
    ) -> DomainResult<Currency> {
        let mut currency = self.get(id).await?;
        currency.set_live_exchange_rates(live_exchange_rates);
        self.repository.update(currency).await
    }

    /// # Returns
    /// * `Ok(u64)` - Number of currencies whose status changed
    pub async fn update_many_status(&self, ids: &[String], status: Visibility) -> DomainResult<u64> {
        let ids = parse_ids(Resource::Currency, ids)?;
        self.repository.update_status_many(&ids, status).await
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(Resource::Currency, id)?;
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(Resource::Currency));
        }
        info!(currency_id = %id, "Currency deleted");
        Ok(())
    }

    /// Delete every listed currency, failing when none matched
    pub async fn delete_many(&self, ids: &[String]) -> DomainResult<u64> {
        let ids = parse_ids(Resource::Currency, ids)?;
        match self.repository.delete_many(&ids).await? {
            0 => Err(DomainError::not_found(Resource::Currency)),
            deleted => Ok(deleted),
        }
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        }
        .into());
    }
    Ok(())
}
