//! Named JSON setting documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Well-known setting document names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingName {
    Global,
    Store,
    StoreCustomization,
}

impl SettingName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingName::Global => "globalSetting",
            SettingName::Store => "storeSetting",
            SettingName::StoreCustomization => "storeCustomizationSetting",
        }
    }
}

impl std::fmt::Display for SettingName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Setting record, `name` is unique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub setting: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn new(name: impl Into<String>, setting: Value) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            setting,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deep-merge `patch` into the stored document
    pub fn merge(&mut self, patch: Value) {
        merge_json(&mut self.setting, patch);
        self.updated_at = Utc::now();
    }

    /// Keep only the given top-level keys of the document.
    ///
    /// An empty key list returns the whole document.
    pub fn project(&self, keys: &[&str]) -> Value {
        if keys.is_empty() {
            return self.setting.clone();
        }

        let mut projected = Map::new();
        if let Value::Object(document) = &self.setting {
            for key in keys {
                if let Some(value) = document.get(*key) {
                    projected.insert((*key).to_string(), value.clone());
                }
            }
        }
        Value::Object(projected)
    }
}

/// Recursively merge `patch` into `target`.
///
/// Objects are merged key by key, any other value in the patch replaces the
/// target value. Keys absent from the patch are preserved.
pub fn merge_json(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_preserves_absent_keys() {
        let mut doc = json!({
            "shop_name": "E-Luxe",
            "seo": { "meta_title": "Home", "favicon": "f.png" }
        });

        merge_json(&mut doc, json!({ "seo": { "meta_title": "Accueil" } }));

        assert_eq!(doc["shop_name"], "E-Luxe");
        assert_eq!(doc["seo"]["meta_title"], "Accueil");
        assert_eq!(doc["seo"]["favicon"], "f.png");
    }

    #[test]
    fn test_merge_replaces_non_objects() {
        let mut doc = json!({ "tags": ["a", "b"], "count": 1 });

        merge_json(&mut doc, json!({ "tags": ["c"], "count": null }));

        assert_eq!(doc["tags"], json!(["c"]));
        assert!(doc["count"].is_null());
    }

    #[test]
    fn test_project_selected_keys() {
        let setting = Setting::new(
            SettingName::StoreCustomization.as_str(),
            json!({ "home": { "a": 1 }, "seo": { "b": 2 }, "footer": {} }),
        );

        assert_eq!(setting.project(&["seo"]), json!({ "seo": { "b": 2 } }));
        assert_eq!(
            setting.project(&["home", "missing"]),
            json!({ "home": { "a": 1 } })
        );
        assert_eq!(setting.project(&[]), setting.setting);
    }

    #[test]
    fn test_setting_names() {
        assert_eq!(SettingName::Global.as_str(), "globalSetting");
        assert_eq!(SettingName::Store.to_string(), "storeSetting");
    }
}
