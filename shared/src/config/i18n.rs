//! Locale negotiation configuration

use serde::{Deserialize, Serialize};

use super::{env_list, env_string};
use crate::types::Locale;

/// Supported locales and the fallback used outside of `/v1/{lang}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub supported_locales: Vec<Locale>,
    pub default_locale: Locale,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported_locales: Locale::all().to_vec(),
            default_locale: Locale::default(),
        }
    }
}

impl I18nConfig {
    /// Create from `SUPPORTED_LOCALES` and `DEFAULT_LOCALE`
    ///
    /// Codes without translations are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let supported_locales = env_list("SUPPORTED_LOCALES")
            .map(|codes| {
                codes
                    .iter()
                    .filter_map(|code| code.parse::<Locale>().ok())
                    .collect::<Vec<_>>()
            })
            .filter(|locales| !locales.is_empty())
            .unwrap_or(defaults.supported_locales);
        let default_locale = env_string("DEFAULT_LOCALE", Locale::default().code())
            .parse()
            .unwrap_or_default();

        Self {
            supported_locales,
            default_locale,
        }
    }

    /// Resolve a path code against the supported set
    pub fn resolve(&self, code: &str) -> Option<Locale> {
        code.parse::<Locale>()
            .ok()
            .filter(|locale| self.supported_locales.contains(locale))
    }
}
