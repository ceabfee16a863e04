//! Storefront language

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Visibility;

/// Language record, `name` is unique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub iso_code: String,
    pub flag: Option<String>,
    pub status: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLanguage {
    pub name: String,
    pub iso_code: String,
    pub flag: Option<String>,
    pub status: Option<Visibility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageUpdate {
    pub name: Option<String>,
    pub iso_code: Option<String>,
    pub flag: Option<String>,
    pub status: Option<Visibility>,
}

impl Language {
    pub fn new(input: NewLanguage) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            iso_code: input.iso_code,
            flag: input.flag,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: LanguageUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(iso_code) = update.iso_code {
            self.iso_code = iso_code;
        }
        if update.flag.is_some() {
            self.flag = update.flag;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: Visibility) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
