//! MySQL implementation of the LanguageRepository trait.
//!
//! Name uniqueness is enforced by the `uq_languages_name` index.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use setting_core::domain::entities::Language;
use setting_core::domain::value_objects::Visibility;
use setting_core::errors::{DomainError, Resource};
use setting_core::repositories::LanguageRepository;

use super::{column, db_error, enum_column, is_unique_violation, push_id_list, uuid_column};

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, iso_code, flag, status, created_at, updated_at
    FROM languages
"#;

/// MySQL implementation of LanguageRepository
pub struct MySqlLanguageRepository {
    pool: MySqlPool,
}

impl MySqlLanguageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_language(row: &MySqlRow) -> Result<Language, DomainError> {
        Ok(Language {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            iso_code: column(row, "iso_code")?,
            flag: column(row, "flag")?,
            status: enum_column(row, "status")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn write_error(action: &str, e: sqlx::Error) -> DomainError {
        if is_unique_violation(&e) {
            DomainError::AlreadyExists {
                resource: Resource::Language,
            }
        } else {
            db_error(action, e)
        }
    }
}

#[async_trait]
impl LanguageRepository for MySqlLanguageRepository {
    async fn create(&self, language: Language) -> Result<Language, DomainError> {
        let query = r#"
            INSERT INTO languages (id, name, iso_code, flag, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(language.id.to_string())
            .bind(&language.name)
            .bind(&language.iso_code)
            .bind(&language.flag)
            .bind(language.status.as_str())
            .bind(language.created_at)
            .bind(language.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("create language", e))?;

        Ok(language)
    }

    async fn create_many(&self, languages: Vec<Language>) -> Result<Vec<Language>, DomainError> {
        if languages.is_empty() {
            return Ok(languages);
        }

        let mut query = QueryBuilder::<MySql>::new(
            "INSERT INTO languages (id, name, iso_code, flag, status, created_at, updated_at) ",
        );
        query.push_values(languages.iter(), |mut row, language| {
            row.push_bind(language.id.to_string())
                .push_bind(language.name.clone())
                .push_bind(language.iso_code.clone())
                .push_bind(language.flag.clone())
                .push_bind(language.status.as_str())
                .push_bind(language.created_at)
                .push_bind(language.updated_at);
        });

        query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("create languages", e))?;

        Ok(languages)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Language>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find language", e))?;

        row.as_ref().map(Self::row_to_language).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Language>, DomainError> {
        let query = format!("{} ORDER BY name ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list languages", e))?;

        rows.iter().map(Self::row_to_language).collect()
    }

    async fn find_by_status(&self, status: Visibility) -> Result<Vec<Language>, DomainError> {
        let query = format!("{} WHERE status = ? ORDER BY created_at DESC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list languages", e))?;

        rows.iter().map(Self::row_to_language).collect()
    }

    async fn update(&self, language: Language) -> Result<Language, DomainError> {
        let query = r#"
            UPDATE languages
            SET name = ?, iso_code = ?, flag = ?, status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&language.name)
            .bind(&language.iso_code)
            .bind(&language.flag)
            .bind(language.status.as_str())
            .bind(language.updated_at)
            .bind(language.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::write_error("update language", e))?;

        if result.rows_affected() == 0 && self.find_by_id(language.id).await?.is_none() {
            return Err(DomainError::not_found(Resource::Language));
        }

        Ok(language)
    }

    async fn update_status_many(
        &self,
        ids: &[Uuid],
        status: Visibility,
    ) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<MySql>::new("UPDATE languages SET status = ");
        query
            .push_bind(status.as_str())
            .push(", updated_at = ")
            .push_bind(Utc::now())
            .push(" WHERE id IN ");
        push_id_list(&mut query, ids);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update language statuses", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM languages WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete language", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<MySql>::new("DELETE FROM languages WHERE id IN ");
        push_id_list(&mut query, ids);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete languages", e))?;

        Ok(result.rows_affected())
    }
}
