use serde::{Deserialize, Serialize};
use validator::Validate;

use setting_core::domain::entities::{LanguageUpdate, NewLanguage};
use setting_core::domain::value_objects::Visibility;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLanguageRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, max = 16))]
    pub iso_code: Option<String>,

    pub flag: Option<String>,
    pub status: Option<Visibility>,
}

impl From<CreateLanguageRequest> for NewLanguage {
    fn from(request: CreateLanguageRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            iso_code: request.iso_code.unwrap_or_default(),
            flag: request.flag,
            status: request.status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLanguageRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 16))]
    pub iso_code: Option<String>,

    pub flag: Option<String>,
    pub status: Option<Visibility>,
}

impl From<UpdateLanguageRequest> for LanguageUpdate {
    fn from(request: UpdateLanguageRequest) -> Self {
        Self {
            name: request.name,
            iso_code: request.iso_code,
            flag: request.flag,
            status: request.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LanguageStatusRequest {
    #[validate(required)]
    pub status: Option<Visibility>,
}
