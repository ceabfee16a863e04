use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// A new named setting document
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StoreSettingRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(required)]
    pub setting: Option<Value>,
}

/// Patch of a named setting document, merged into the stored one
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSettingRequest {
    #[validate(required)]
    pub setting: Option<Value>,
}

/// Sections of the store customization document to return
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomizationQuery {
    pub key: Option<String>,

    #[serde(rename = "keyTwo")]
    pub key_two: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customization_query_uses_key_two() {
        let query: CustomizationQuery =
            serde_json::from_str(r#"{"key": "home", "keyTwo": "seo"}"#).unwrap();
        assert_eq!(query.key.as_deref(), Some("home"));
        assert_eq!(query.key_two.as_deref(), Some("seo"));
    }
}
