//! Builds email jobs from notifications and hands them to the publisher

use std::sync::Arc;

use serde_json::{json, Value};
use setting_shared::MailConfig;
use tracing::{info, warn};

use crate::domain::entities::{EmailJob, Notification};
use crate::errors::DomainResult;
use crate::services::messaging::{EmailJobPublisher, EmailTemplate, TemplateRenderer};

const CUSTOMIZATION_CONFIRMATION_SUBJECT: &str = "Your customization request";
const CUSTOMIZATION_ALERT_SUBJECT: &str = "New customization request";
const CONTACT_SUBJECT: &str = "Contact";

/// Addressing overrides sent along a contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactOptions {
    pub receivers: Option<Vec<String>>,
    pub app_name: Option<String>,
    pub support_url: Option<String>,
}

pub struct MailBridge {
    publisher: Arc<dyn EmailJobPublisher>,
    renderer: Arc<dyn TemplateRenderer>,
    config: MailConfig,
}

impl MailBridge {
    pub fn new(
        publisher: Arc<dyn EmailJobPublisher>,
        renderer: Arc<dyn TemplateRenderer>,
        config: MailConfig,
    ) -> Self {
        Self {
            publisher,
            renderer,
            config,
        }
    }

    /// Forward a contact form to the support receivers.
    ///
    /// The job is sent on behalf of the visitor: their name and email are the
    /// sender fields.
    pub async fn send_contact_email(
        &self,
        notification: &Notification,
        options: &ContactOptions,
    ) -> DomainResult<()> {
        let data = json!({
            "name": notification.name.clone().unwrap_or_default(),
            "email": notification.email.clone().unwrap_or_default(),
            "phone": notification.phone.clone().unwrap_or_default(),
            "subject": notification.subject.clone().unwrap_or_default(),
            "message": notification.message,
            "product_name": options.app_name.as_deref().unwrap_or(&self.config.app_name),
            "support_url": options.support_url.as_deref().unwrap_or(&self.config.support_url),
        });
        let body = self.renderer.render(EmailTemplate::ContactNotification, &data)?;

        let job = EmailJob {
            sender_name: notification
                .name
                .clone()
                .unwrap_or_else(|| self.config.sender_name.clone()),
            sender_email: notification
                .email
                .clone()
                .unwrap_or_else(|| self.config.sender_email.clone()),
            receivers: options
                .receivers
                .clone()
                .unwrap_or_else(|| self.config.support_receivers.clone()),
            subject: notification
                .subject
                .clone()
                .unwrap_or_else(|| CONTACT_SUBJECT.to_string()),
            body,
        };

        self.publisher.publish(&job).await?;
        info!(notification_id = %notification.id, "Contact email queued");
        Ok(())
    }

    /// Send the client confirmation and the internal alert of a customization
    /// request.
    ///
    /// Both jobs are attempted, the first failure is returned.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of jobs published
    pub async fn send_customization_emails(&self, notification: &Notification) -> DomainResult<usize> {
        let data = self.customization_data(notification);
        let mut sent = 0;
        let mut first_error = None;

        match &notification.email {
            Some(email) if !email.is_empty() => {
                let result = self
                    .send(
                        EmailTemplate::CustomizationConfirmation,
                        &data,
                        vec![email.clone()],
                        CUSTOMIZATION_CONFIRMATION_SUBJECT,
                    )
                    .await;
                match result {
                    Ok(()) => sent += 1,
                    Err(e) => first_error = Some(e),
                }
            }
            _ => warn!(
                notification_id = %notification.id,
                "Customization request without customer email, confirmation skipped"
            ),
        }

        if self.config.support_receivers.is_empty() {
            warn!(
                notification_id = %notification.id,
                "No support receivers configured, customization alert skipped"
            );
        } else {
            let result = self
                .send(
                    EmailTemplate::CustomizationAlert,
                    &data,
                    self.config.support_receivers.clone(),
                    CUSTOMIZATION_ALERT_SUBJECT,
                )
                .await;
            match result {
                Ok(()) => sent += 1,
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(sent),
        }
    }

    fn customization_data(&self, notification: &Notification) -> Value {
        json!({
            "name": notification.name.clone().unwrap_or_default(),
            "email": notification.email.clone().unwrap_or_default(),
            "phone": notification.phone.clone().unwrap_or_default(),
            "subject": notification.subject.clone().unwrap_or_default(),
            "message": notification.message,
            "image": notification.image.clone().unwrap_or_default(),
            "product_id": notification.product_id.clone().unwrap_or_default(),
            "product_name": self.config.app_name,
            "support_url": self.config.support_url,
        })
    }

    async fn send(
        &self,
        template: EmailTemplate,
        data: &Value,
        receivers: Vec<String>,
        subject: &str,
    ) -> DomainResult<()> {
        let body = self.renderer.render(template, data)?;
        let job = EmailJob {
            sender_name: self.config.sender_name.clone(),
            sender_email: self.config.sender_email.clone(),
            receivers,
            subject: subject.to_string(),
            body,
        };
        self.publisher.publish(&job).await
    }
}
