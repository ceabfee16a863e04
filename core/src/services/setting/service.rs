use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::entities::{Setting, SettingName};
use crate::errors::{DomainError, DomainResult, Resource, ValidationError};
use crate::repositories::{CurrencyRepository, SettingRepository};

const DEFAULT_CURRENCY: &str = "default_currency";
const DEFAULT_CURRENCY_SYMBOL: &str = "default_currency_symbol";

/// Reads and patches the named setting documents.
///
/// The currency repository resolves the default currency named by a global
/// setting patch.
pub struct SettingService {
    settings: Arc<dyn SettingRepository>,
    currencies: Arc<dyn CurrencyRepository>,
}

impl SettingService {
    pub fn new(
        settings: Arc<dyn SettingRepository>,
        currencies: Arc<dyn CurrencyRepository>,
    ) -> Self {
        Self {
            settings,
            currencies,
        }
    }

    /// Store a new named document
    ///
    /// # Returns
    /// * `Err(DomainError::AlreadyExists)` - A document with this name exists
    pub async fn store(&self, name: &str, setting: Value) -> DomainResult<Setting> {
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        let created = self.settings.create(Setting::new(name, setting)).await?;
        info!(setting = %created.name, "Setting stored");
        Ok(created)
    }

    pub async fn get_global(&self) -> DomainResult<Value> {
        Ok(self.find(SettingName::Global).await?.setting)
    }

    pub async fn get_store(&self) -> DomainResult<Value> {
        Ok(self.find(SettingName::Store).await?.setting)
    }

    /// The `seo` section of the store customization document
    pub async fn get_store_seo(&self) -> DomainResult<Value> {
        Ok(self
            .find(SettingName::StoreCustomization)
            .await?
            .project(&["seo"]))
    }

    /// Sections of the store customization document selected by `key` and
    /// `key_two`, the whole document when neither is given
    pub async fn get_store_customization(
        &self,
        key: Option<&str>,
        key_two: Option<&str>,
    ) -> DomainResult<Value> {
        let keys: Vec<&str> = [key, key_two]
            .into_iter()
            .flatten()
            .filter(|k| !k.is_empty())
            .collect();
        Ok(self.find(SettingName::StoreCustomization).await?.project(&keys))
    }

    /// Merge a patch into the global setting.
    ///
    /// When the patch names a `default_currency_symbol`, both default currency
    /// fields are taken from the currency carrying that symbol, or cleared
    /// when no currency matches.
    pub async fn update_global(&self, patch: Value) -> DomainResult<Setting> {
        let mut patch = ensure_object(patch)?;

        let symbol = patch
            .get(DEFAULT_CURRENCY_SYMBOL)
            .map(|value| value.as_str().map(str::to_string));
        if let (Some(symbol), Value::Object(fields)) = (symbol, &mut patch) {
            let currency = match symbol {
                Some(symbol) => self.currencies.find_by_symbol(&symbol).await?,
                None => None,
            };
            debug!(found = currency.is_some(), "Resolved default currency");
            let (name, symbol) = match currency {
                Some(currency) => (Value::from(currency.name), Value::from(currency.symbol)),
                None => (Value::Null, Value::Null),
            };
            fields.insert(DEFAULT_CURRENCY.to_string(), name);
            fields.insert(DEFAULT_CURRENCY_SYMBOL.to_string(), symbol);
        }

        self.merge(SettingName::Global, patch).await
    }

    pub async fn update_store(&self, patch: Value) -> DomainResult<Setting> {
        let patch = ensure_object(patch)?;
        self.merge(SettingName::Store, patch).await
    }

    pub async fn update_store_customization(&self, patch: Value) -> DomainResult<Setting> {
        let patch = ensure_object(patch)?;
        self.merge(SettingName::StoreCustomization, patch).await
    }

    async fn find(&self, name: SettingName) -> DomainResult<Setting> {
        self.settings
            .find_by_name(name.as_str())
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Setting))
    }

    async fn merge(&self, name: SettingName, patch: Value) -> DomainResult<Setting> {
        let mut setting = self.find(name).await?;
        setting.merge(patch);
        let updated = self.settings.update(setting).await?;
        info!(setting = %name, "Setting updated");
        Ok(updated)
    }
}

fn ensure_object(patch: Value) -> DomainResult<Value> {
    if !patch.is_object() {
        return Err(ValidationError::invalid("setting", "The setting field must be an object").into());
    }
    Ok(patch)
}
