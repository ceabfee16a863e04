//! Currency entity offered by the storefront

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Visibility;

/// Currency record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub symbol: Option<String>,
    pub iso_code: Option<String>,
    /// Kept as text so rates round-trip exactly as entered
    pub exchange_rate: Option<String>,
    pub status: Visibility,
    pub live_exchange_rates: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input of a currency creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCurrency {
    pub name: String,
    pub symbol: Option<String>,
    pub iso_code: Option<String>,
    pub exchange_rate: Option<String>,
    pub status: Option<Visibility>,
    pub live_exchange_rates: Option<Visibility>,
}

/// Partial update of a currency, absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyUpdate {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub iso_code: Option<String>,
    pub exchange_rate: Option<String>,
    pub status: Option<Visibility>,
    pub live_exchange_rates: Option<Visibility>,
}

impl Currency {
    /// Build a new currency, both visibility flags default to `show`
    pub fn new(input: NewCurrency) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            symbol: input.symbol,
            iso_code: input.iso_code,
            exchange_rate: input.exchange_rate,
            status: input.status.unwrap_or_default(),
            live_exchange_rates: input.live_exchange_rates.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and bump `updated_at`
    pub fn apply(&mut self, update: CurrencyUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.symbol.is_some() {
            self.symbol = update.symbol;
        }
        if update.iso_code.is_some() {
            self.iso_code = update.iso_code;
        }
        if update.exchange_rate.is_some() {
            self.exchange_rate = update.exchange_rate;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(live) = update.live_exchange_rates {
            self.live_exchange_rates = live;
        }
        self.touch();
    }

    /// Toggle visibility; live exchange rates follow the currency status
    pub fn set_status(&mut self, status: Visibility) {
        self.status = status;
        self.live_exchange_rates = status;
        self.touch();
    }

    pub fn set_live_exchange_rates(&mut self, live: Visibility) {
        self.live_exchange_rates = live;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_currency_defaults_to_show() {
        let currency = Currency::new(NewCurrency {
            name: "Euro".to_string(),
            ..Default::default()
        });

        assert_eq!(currency.status, Visibility::Show);
        assert_eq!(currency.live_exchange_rates, Visibility::Show);
        assert_eq!(currency.created_at, currency.updated_at);
    }

    #[test]
    fn test_set_status_drives_live_rates() {
        let mut currency = Currency::new(NewCurrency {
            name: "Dollar".to_string(),
            ..Default::default()
        });

        currency.set_status(Visibility::Hide);
        assert_eq!(currency.status, Visibility::Hide);
        assert_eq!(currency.live_exchange_rates, Visibility::Hide);

        currency.set_live_exchange_rates(Visibility::Show);
        assert_eq!(currency.status, Visibility::Hide);
        assert_eq!(currency.live_exchange_rates, Visibility::Show);
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut currency = Currency::new(NewCurrency {
            name: "Franc CFA".to_string(),
            symbol: Some("FCFA".to_string()),
            ..Default::default()
        });

        currency.apply(CurrencyUpdate {
            exchange_rate: Some("655.957".to_string()),
            ..Default::default()
        });

        assert_eq!(currency.name, "Franc CFA");
        assert_eq!(currency.symbol.as_deref(), Some("FCFA"));
        assert_eq!(currency.exchange_rate.as_deref(), Some("655.957"));
    }

    #[test]
    fn test_serializes_id_as_underscore_id() {
        let currency = Currency::new(NewCurrency {
            name: "Euro".to_string(),
            ..Default::default()
        });
        let value = serde_json::to_value(&currency).unwrap();

        assert_eq!(value["_id"], currency.id.to_string());
        assert_eq!(value["status"], "show");
    }
}
