//! Localized message table
//!
//! Loaded once from `i18n/messages.toml`, falling back to the copy embedded
//! at build time. Lookups take the request locale explicitly.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use setting_core::errors::Resource;
use setting_shared::Locale;

const EMBEDDED_MESSAGES: &str = include_str!("../../i18n/messages.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub en: String,
    pub fr: String,
}

impl Translation {
    fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
        }
    }
}

/// Messages keyed by `category.key`
pub static MESSAGES: Lazy<HashMap<String, Translation>> = Lazy::new(load_messages);

fn load_messages() -> HashMap<String, Translation> {
    let config_path = Path::new("i18n/messages.toml");

    if config_path.exists() {
        match fs::read_to_string(config_path).map_err(|e| e.to_string()).and_then(|c| parse(&c)) {
            Ok(messages) => return messages,
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable i18n/messages.toml"),
        }
    }

    parse(EMBEDDED_MESSAGES).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Embedded message table is invalid");
        HashMap::new()
    })
}

fn parse(content: &str) -> Result<HashMap<String, Translation>, String> {
    let categories: HashMap<String, HashMap<String, Translation>> =
        toml::from_str(content).map_err(|e| e.to_string())?;

    Ok(categories
        .into_iter()
        .flat_map(|(category, entries)| {
            entries
                .into_iter()
                .map(move |(key, translation)| (format!("{}.{}", category, key), translation))
        })
        .collect())
}

/// Message for `key`, or the key itself when it has no translation
pub fn t(locale: Locale, key: &str) -> String {
    MESSAGES
        .get(key)
        .map(|translation| translation.get(locale).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Message for `key` with `{resource}` replaced by the localized resource name
pub fn t_resource(locale: Locale, key: &str, resource: Resource) -> String {
    let name = t(locale, &format!("resources.{}", resource.i18n_key()));
    t(locale, key).replace("{resource}", &name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_parses() {
        let messages = parse(EMBEDDED_MESSAGES).unwrap();
        assert!(messages.contains_key("errors.token_not_found"));
        assert!(messages.contains_key("messages.notification_read"));
    }

    #[test]
    fn test_lookup_per_locale() {
        assert_eq!(t(Locale::En, "errors.unsupported_locale"), "Language not supported");
        assert_eq!(t(Locale::Fr, "errors.unsupported_locale"), "Langue non prise en charge");
    }

    #[test]
    fn test_resource_placeholder() {
        assert_eq!(
            t_resource(Locale::En, "errors.not_found", Resource::Currency),
            "Currency not found"
        );
        assert_eq!(
            t_resource(Locale::Fr, "errors.not_found", Resource::Currency),
            "Devise introuvable"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::En, "errors.nope"), "errors.nope");
    }
}
