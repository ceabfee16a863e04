use std::sync::Arc;

use setting_shared::utils::{fits_foreign_id, FOREIGN_ID_MAX_LEN};
use setting_shared::Pagination;
use tracing::{info, warn};

use crate::domain::entities::{NewNotification, Notification, NotificationPage, NotificationType};
use crate::domain::value_objects::ReadStatus;
use crate::errors::{parse_id, parse_ids, DomainError, DomainResult, Resource, ValidationError};
use crate::repositories::NotificationRepository;
use crate::services::mail_bridge::{ContactOptions, MailBridge};
use crate::services::messaging::{RealtimePublisher, NOTIFICATION_EVENT};

/// Notification management service.
///
/// Side effects of a creation (realtime push, contact email) run on spawned
/// tasks. Their failures are logged and never reach the caller.
pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
    realtime: Arc<dyn RealtimePublisher>,
    mail: Arc<MailBridge>,
}

impl NotificationService {
    pub fn new(
        repository: Arc<dyn NotificationRepository>,
        realtime: Arc<dyn RealtimePublisher>,
        mail: Arc<MailBridge>,
    ) -> Self {
        Self {
            repository,
            realtime,
            mail,
        }
    }

    /// One page of notifications, newest first, with total and unread counts
    pub async fn list(&self, pagination: Pagination) -> DomainResult<NotificationPage> {
        let total_doc = self.repository.count_all().await?;
        let total_unread_doc = self.repository.count_by_status(ReadStatus::Unread).await?;
        let notifications = self.repository.find_page(pagination).await?;

        Ok(NotificationPage {
            total_doc,
            total_unread_doc,
            notifications,
        })
    }

    pub async fn get(&self, id: &str) -> DomainResult<Notification> {
        let id = parse_id(Resource::Notification, id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Resource::Notification))
    }

    /// Persist a notification and push it to realtime clients
    pub async fn store(&self, input: NewNotification) -> DomainResult<Notification> {
        validate(&input)?;
        let notification = self.repository.create(Notification::new(input)).await?;
        info!(
            notification_id = %notification.id,
            kind = %notification.kind,
            "Notification stored"
        );

        match serde_json::to_value(&notification) {
            Ok(data) => {
                let realtime = Arc::clone(&self.realtime);
                let id = notification.id;
                tokio::spawn(async move {
                    if let Err(e) = realtime.push(NOTIFICATION_EVENT, &data).await {
                        warn!(notification_id = %id, error = %e, "Realtime push failed");
                    }
                });
            }
            Err(e) => warn!(error = %e, "Failed to serialize notification for realtime push"),
        }

        Ok(notification)
    }

    /// Store a notification submitted over HTTP.
    ///
    /// A `contact` notification also forwards the form to the support
    /// receivers.
    pub async fn create(
        &self,
        input: NewNotification,
        options: &ContactOptions,
    ) -> DomainResult<Notification> {
        let notification = self.store(input).await?;

        if notification.kind == NotificationType::Contact {
            let mail = Arc::clone(&self.mail);
            let contact = notification.clone();
            let options = options.clone();
            tokio::spawn(async move {
                if let Err(e) = mail.send_contact_email(&contact, &options).await {
                    warn!(notification_id = %contact.id, error = %e, "Contact email failed");
                }
            });
        }

        Ok(notification)
    }

    /// Set the status of one notification
    ///
    /// # Returns
    /// * `Ok(u64)` - Unread notifications remaining after the change
    pub async fn update_status(&self, id: &str, status: ReadStatus) -> DomainResult<u64> {
        let id = parse_id(Resource::Notification, id)?;
        if !self.repository.update_status(id, status).await? {
            return Err(DomainError::not_found(Resource::Notification));
        }
        self.repository.count_by_status(ReadStatus::Unread).await
    }

    pub async fn update_many_status(&self, ids: &[String], status: ReadStatus) -> DomainResult<u64> {
        let ids = parse_ids(Resource::Notification, ids)?;
        self.repository.update_status_many(&ids, status).await
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        let id = parse_id(Resource::Notification, id)?;
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(Resource::Notification));
        }
        Ok(())
    }

    /// Delete every notification referencing the product
    pub async fn delete_by_product_id(&self, product_id: &str) -> DomainResult<u64> {
        match self.repository.delete_by_product_id(product_id).await? {
            0 => Err(DomainError::not_found(Resource::Notification)),
            deleted => Ok(deleted),
        }
    }

    pub async fn delete_many(&self, ids: &[String]) -> DomainResult<u64> {
        let ids = parse_ids(Resource::Notification, ids)?;
        match self.repository.delete_many(&ids).await? {
            0 => Err(DomainError::not_found(Resource::Notification)),
            deleted => Ok(deleted),
        }
    }
}

fn validate(input: &NewNotification) -> DomainResult<()> {
    if input.message.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "message".to_string(),
        }
        .into());
    }

    let references = [
        ("order_id", &input.order_id),
        ("product_id", &input.product_id),
        ("user_id", &input.user_id),
    ];
    for (field, value) in references {
        if let Some(value) = value {
            if !fits_foreign_id(value) {
                let message = format!(
                    "The {} may not be greater than {} characters",
                    field, FOREIGN_ID_MAX_LEN
                );
                return Err(ValidationError::invalid(field, message).into());
            }
        }
    }
    Ok(())
}
