//! MySQL implementations of the core repository traits
//!
//! Identifiers are stored as `CHAR(36)` and enums as their lowercase names.

mod currency_repository_impl;
mod language_repository_impl;
mod notification_repository_impl;
mod setting_repository_impl;

pub use currency_repository_impl::MySqlCurrencyRepository;
pub use language_repository_impl::MySqlLanguageRepository;
pub use notification_repository_impl::MySqlNotificationRepository;
pub use setting_repository_impl::MySqlSettingRepository;

use std::fmt::Display;
use std::str::FromStr;

use sqlx::mysql::MySqlRow;
use sqlx::{MySql, QueryBuilder, Row};
use uuid::Uuid;

use setting_core::errors::DomainError;

/// Wrap a driver error with the action that failed
pub(crate) fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to {}: {}", action, e),
    }
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// Read a column, mapping decode failures to an internal error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

/// Parse a column stored as the lowercase name of an enum
pub(crate) fn enum_column<T>(row: &MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = column(row, name)?;
    raw.parse().map_err(|e: T::Err| DomainError::Internal {
        message: format!("Invalid value in {}: {}", name, e),
    })
}

/// Append `(?, ?, ...)` binding every id
pub(crate) fn push_id_list(query: &mut QueryBuilder<'_, MySql>, ids: &[Uuid]) {
    query.push("(");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id.to_string());
    }
    separated.push_unseparated(")");
}
