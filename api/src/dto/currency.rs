use serde::{Deserialize, Serialize};
use validator::Validate;

use setting_core::domain::entities::{CurrencyUpdate, NewCurrency};
use setting_core::domain::value_objects::Visibility;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCurrencyRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 16))]
    pub symbol: Option<String>,

    #[validate(length(max = 8))]
    pub iso_code: Option<String>,

    pub exchange_rate: Option<String>,
    pub status: Option<Visibility>,
    pub live_exchange_rates: Option<Visibility>,
}

impl From<CreateCurrencyRequest> for NewCurrency {
    fn from(request: CreateCurrencyRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            symbol: request.symbol,
            iso_code: request.iso_code,
            exchange_rate: request.exchange_rate,
            status: request.status,
            live_exchange_rates: request.live_exchange_rates,
        }
    }
}

/// Partial update, absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCurrencyRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 16))]
    pub symbol: Option<String>,

    #[validate(length(max = 8))]
    pub iso_code: Option<String>,

    pub exchange_rate: Option<String>,
    pub status: Option<Visibility>,
    pub live_exchange_rates: Option<Visibility>,
}

impl From<UpdateCurrencyRequest> for CurrencyUpdate {
    fn from(request: UpdateCurrencyRequest) -> Self {
        Self {
            name: request.name,
            symbol: request.symbol,
            iso_code: request.iso_code,
            exchange_rate: request.exchange_rate,
            status: request.status,
            live_exchange_rates: request.live_exchange_rates,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CurrencyStatusRequest {
    #[validate(required)]
    pub status: Option<Visibility>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LiveExchangeRatesRequest {
    #[validate(required)]
    pub live_exchange_rates: Option<Visibility>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_request;

    #[test]
    fn test_name_is_required() {
        let request: CreateCurrencyRequest = serde_json::from_str(r#"{"symbol": "$"}"#).unwrap();
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn test_create_request_into_domain() {
        let request: CreateCurrencyRequest =
            serde_json::from_str(r#"{"name": "Euro", "symbol": "€", "status": "hide"}"#).unwrap();
        assert!(validate_request(&request).is_ok());

        let input = NewCurrency::from(request);
        assert_eq!(input.name, "Euro");
        assert_eq!(input.status, Some(Visibility::Hide));
        assert!(input.live_exchange_rates.is_none());
    }
}
