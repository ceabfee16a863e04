//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use setting_core::domain::entities::Notification;
use setting_core::domain::value_objects::ReadStatus;
use setting_core::errors::DomainError;
use setting_core::repositories::NotificationRepository;
use setting_shared::Pagination;

use super::{column, db_error, enum_column, push_id_list, uuid_column};

/// MySQL implementation of NotificationRepository
pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &MySqlRow) -> Result<Notification, DomainError> {
        Ok(Notification {
            id: uuid_column(row, "id")?,
            kind: enum_column(row, "type")?,
            order_id: column(row, "order_id")?,
            product_id: column(row, "product_id")?,
            user_id: column(row, "user_id")?,
            name: column(row, "name")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            subject: column(row, "subject")?,
            message: column(row, "message")?,
            image: column(row, "image")?,
            status: enum_column(row, "status")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn count(&self, status: Option<ReadStatus>) -> Result<u64, DomainError> {
        let row = match status {
            Some(status) => {
                sqlx::query("SELECT COUNT(*) AS total FROM notifications WHERE status = ?")
                    .bind(status.as_str())
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT COUNT(*) AS total FROM notifications")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| db_error("count notifications", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| db_error("read notification count", e))?;
        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        let query = r#"
            INSERT INTO notifications (
                id, type, order_id, product_id, user_id, name, email, phone, subject,
                message, image, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(notification.id.to_string())
            .bind(notification.kind.as_str())
            .bind(&notification.order_id)
            .bind(&notification.product_id)
            .bind(&notification.user_id)
            .bind(&notification.name)
            .bind(&notification.email)
            .bind(&notification.phone)
            .bind(&notification.subject)
            .bind(&notification.message)
            .bind(&notification.image)
            .bind(notification.status.as_str())
            .bind(notification.created_at)
            .bind(notification.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create notification", e))?;

        Ok(notification)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, DomainError> {
        let row = sqlx::query("SELECT * FROM notifications WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find notification", e))?;

        row.as_ref().map(Self::row_to_notification).transpose()
    }

    async fn find_page(&self, pagination: Pagination) -> Result<Vec<Notification>, DomainError> {
        let rows = sqlx::query(
            "SELECT * FROM notifications ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list notifications", e))?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        self.count(None).await
    }

    async fn count_by_status(&self, status: ReadStatus) -> Result<u64, DomainError> {
        self.count(Some(status)).await
    }

    async fn update_status(&self, id: Uuid, status: ReadStatus) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE notifications SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update notification status", e))?;

        // updated_at always changes, so a matched row is always reported
        Ok(result.rows_affected() > 0)
    }

    async fn update_status_many(
        &self,
        ids: &[Uuid],
        status: ReadStatus,
    ) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<MySql>::new("UPDATE notifications SET status = ");
        query
            .push_bind(status.as_str())
            .push(", updated_at = ")
            .push_bind(Utc::now())
            .push(" WHERE status <> ")
            .push_bind(status.as_str())
            .push(" AND id IN ");
        push_id_list(&mut query, ids);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update notification statuses", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete notification", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_product_id(&self, product_id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM notifications WHERE product_id = ?")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete product notifications", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<MySql>::new("DELETE FROM notifications WHERE id IN ");
        push_id_list(&mut query, ids);

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete notifications", e))?;

        Ok(result.rows_affected())
    }
}
