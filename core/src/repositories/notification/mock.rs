//! Mock implementation of NotificationRepository for testing

use async_trait::async_trait;
use setting_shared::Pagination;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Notification;
use crate::domain::value_objects::ReadStatus;
use crate::errors::DomainError;

use super::trait_::NotificationRepository;

/// Mock notification repository.
///
/// `failing()` builds a repository whose writes return an internal error,
/// used to exercise the relay failure paths.
pub struct MockNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
    fail_writes: AtomicBool,
}

impl MockNotificationRepository {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Vec::new())),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let repo = Self::new();
        repo.fail_writes.store(true, Ordering::SeqCst);
        repo
    }

    /// Snapshot of every stored notification, in insertion order
    pub async fn all(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::internal("notification store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockNotificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        self.check_writable()?;
        self.notifications.write().await.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn find_page(&self, pagination: Pagination) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications
            .iter()
            .rev()
            .skip(pagination.offset() as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        Ok(self.notifications.read().await.len() as u64)
    }

    async fn count_by_status(&self, status: ReadStatus) -> Result<u64, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications.iter().filter(|n| n.status == status).count() as u64)
    }

    async fn update_status(&self, id: Uuid, status: ReadStatus) -> Result<bool, DomainError> {
        self.check_writable()?;
        let mut notifications = self.notifications.write().await;
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.set_status(status);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_status_many(
        &self,
        ids: &[Uuid],
        status: ReadStatus,
    ) -> Result<u64, DomainError> {
        self.check_writable()?;
        let mut notifications = self.notifications.write().await;
        let mut modified = 0;
        for notification in notifications.iter_mut().filter(|n| ids.contains(&n.id)) {
            if notification.status != status {
                notification.set_status(status);
                modified += 1;
            }
        }
        Ok(modified)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_writable()?;
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        Ok(notifications.len() < before)
    }

    async fn delete_by_product_id(&self, product_id: &str) -> Result<u64, DomainError> {
        self.check_writable()?;
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.product_id.as_deref() != Some(product_id));
        Ok((before - notifications.len()) as u64)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        self.check_writable()?;
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| !ids.contains(&n.id));
        Ok((before - notifications.len()) as u64)
    }
}
