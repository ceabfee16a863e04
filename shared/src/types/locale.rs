//! Locale types for internationalization

use serde::{Deserialize, Serialize};

/// Locale selected by the `/v1/{lang}` path segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Every locale with translations
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Fr]
    }

    /// Get locale code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
        assert!("de".parse::<Locale>().is_err());
        assert!("settings".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
    }
}
