//! MySQL implementation of the CurrencyRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use setting_core::domain::entities::Currency;
use setting_core::domain::value_objects::Visibility;
use setting_core::errors::{DomainError, Resource};
use setting_core::repositories::CurrencyRepository;

use super::{column, db_error, enum_column, push_id_list, uuid_column};

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, symbol, iso_code, exchange_rate, status, live_exchange_rates,
           created_at, updated_at
    FROM currencies
"#;

/// MySQL implementation of CurrencyRepository
pub struct MySqlCurrencyRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCurrencyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_currency(row: &MySqlRow) -> Result<Currency, DomainError> {
        Ok(Currency {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            symbol: column(row, "symbol")?,
            iso_code: column(row, "iso_code")?,
            exchange_rate: column(row, "exchange_rate")?,
            status: enum_column(row, "status")?,
            live_exchange_rates: enum_column(row, "live_exchange_rates")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn fetch_all(&self, query: &str, status: Option<Visibility>) -> Result<Vec<Currency>, DomainError> {
        let mut statement = sqlx::query(query);
        if let Some(status) = status {
            statement = statement.bind(status.as_str());
        }
        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list currencies", e))?;

        rows.iter().map(Self::row_to_currency).collect()
    }
}

#[async_trait]
impl CurrencyRepository for MySqlCurrencyRepository {
    async fn create(&self, currency: Currency) -> Result<Currency, DomainError> {
        let query = r#"
            INSERT INTO currencies (
                id, name, symbol, iso_code, exchange_rate, status, live_exchange_rates,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(currency.id.to_string())
            .bind(&currency.name)
            .bind(&currency.symbol)
            .bind(&currency.iso_code)
            .bind(&currency.exchange_rate)
            .bind(currency.status.as_str())
            .bind(currency.live_exchange_rates.as_str())
            .bind(currency.created_at)
            .bind(currency.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create currency", e))?;

        Ok(currency)
    }

    async fn create_many(&self, currencies: Vec<Currency>) -> Result<Vec<Currency>, DomainError> {
        if currencies.is_empty() {
            return Ok(currencies);
        }

        let mut query = QueryBuilder::<MySql>::new(
            "INSERT INTO currencies (id, name, symbol, iso_code, exchange_rate, status, \
             live_exchange_rates, created_at, updated_at) ",
        );
        query.push_values(currencies.iter(), |mut row, currency| {
            row.push_bind(currency.id.to_string())
                .push_bind(currency.name.clone())
                .push_bind(currency.symbol.clone())
                .push_bind(currency.iso_code.clone())
                .push_bind(currency.exchange_rate.clone())
                .push_bind(currency.status.as_str())
                .push_bind(currency.live_exchange_rates.as_str())
                .push_bind(currency.created_at)
                .push_bind(currency.updated_at);
        });

        query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create currencies", e))?;

        Ok(currencies)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Currency>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find currency", e))?;

        row.as_ref().map(Self::row_to_currency).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Currency>, DomainError> {
        let query = format!("{} ORDER BY name ASC", SELECT_COLUMNS);
        self.fetch_all(&query, None).await
    }

    async fn find_by_status(&self, status: Visibility) -> Result<Vec<Currency>, DomainError> {
        let query = format!("{} WHERE status = ? ORDER BY created_at DESC", SELECT_COLUMNS);
        self.fetch_all(&query, Some(status)).await
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Option<Currency>, DomainError> {
        let query = format!("{} WHERE symbol = ? ORDER BY created_at ASC LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(symbol)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find currency by symbol", e))?;

        row.as_ref().map(Self::row_to_currency).transpose()
    }

    async fn update(&self, currency: Currency) -> Result<Currency, DomainError> {
        let query = r#"
            UPDATE currencies
            SET name = ?, symbol = ?, iso_code = ?, exchange_rate = ?, status = ?,
                live_exchange_rates = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&currency.name)
            .bind(&currency.symbol)
            .bind(&currency.iso_code)
            .bind(&currency.exchange_rate)
            .bind(currency.status.as_str())
            .bind(currency.live_exchange_rates.as_str())
            .bind(currency.updated_at)
            .bind(currency.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update currency", e))?;

        // MySQL reports changed rows only, an unchanged row still exists
        if result.rows_affected() == 0 && self.find_by_id(currency.id).await?.is_none() {
            return Err(DomainError::not_found(Resource::Currency));
        }

        Ok(currency)
    }

    async fn update_status_many(
        &self,
        ids: &[Uuid],
        status: Visibility,
    ) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<MySql>::new("UPDATE currencies SET status = ");
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
            .map_err(|e| db_error("update currency statuses", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM currencies WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete currency", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<MySql>::new("DELETE FROM currencies WHERE id IN ");
        push_id_list(&mut query, ids);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete currencies", e))?;

        Ok(result.rows_affected())
    }
}
