//! MySQL implementation of the SettingRepository trait.
//!
//! Documents live in a JSON column.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;

use setting_core::domain::entities::Setting;
use setting_core::errors::{DomainError, Resource};
use setting_core::repositories::SettingRepository;

use super::{column, db_error, is_unique_violation, uuid_column};

/// MySQL implementation of SettingRepository
pub struct MySqlSettingRepository {
    pool: MySqlPool,
}

impl MySqlSettingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_setting(row: &MySqlRow) -> Result<Setting, DomainError> {
        let Json(setting): Json<Value> = column(row, "setting")?;
        Ok(Setting {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            setting,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl SettingRepository for MySqlSettingRepository {
    async fn create(&self, setting: Setting) -> Result<Setting, DomainError> {
        let query = r#"
            INSERT INTO settings (id, name, setting, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(setting.id.to_string())
            .bind(&setting.name)
            .bind(Json(&setting.setting))
            .bind(setting.created_at)
            .bind(setting.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::AlreadyExists {
                        resource: Resource::Setting,
                    }
                } else {
                    db_error("create setting", e)
                }
            })?;

        Ok(setting)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Setting>, DomainError> {
        let query = r#"
            SELECT id, name, setting, created_at, updated_at
            FROM settings
            WHERE name = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find setting", e))?;

        row.as_ref().map(Self::row_to_setting).transpose()
    }

    async fn update(&self, setting: Setting) -> Result<Setting, DomainError> {
        let result = sqlx::query("UPDATE settings SET setting = ?, updated_at = ? WHERE name = ?")
            .bind(Json(&setting.setting))
            .bind(setting.updated_at)
            .bind(&setting.name)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update setting", e))?;

        if result.rows_affected() == 0 && self.find_by_name(&setting.name).await?.is_none() {
            return Err(DomainError::not_found(Resource::Setting));
        }

        Ok(setting)
    }
}
