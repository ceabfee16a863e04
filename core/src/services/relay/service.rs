use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::{DeadLetter, Notification, NotificationType};
use crate::domain::value_objects::MessageEnvelope;
use crate::errors::DomainError;
use crate::services::mail_bridge::MailBridge;
use crate::services::messaging::{DeadLetterSink, InboundDelivery};
use crate::services::notification::NotificationService;

use super::payload::{CustomizationMessage, OrderMessage};

/// Topics consumed by the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayTopic {
    OrderCreated,
    CustomizationRequested,
}

impl RelayTopic {
    pub fn all() -> [RelayTopic; 2] {
        [RelayTopic::OrderCreated, RelayTopic::CustomizationRequested]
    }

    pub fn routing_key(&self) -> &'static str {
        match self {
            RelayTopic::OrderCreated => "createOrderNotification",
            RelayTopic::CustomizationRequested => "createCustomizationNotification",
        }
    }
}

impl std::fmt::Display for RelayTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.routing_key())
    }
}

#[derive(Error, Debug)]
pub enum RelayFailure {
    #[error("Invalid payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown notification type: {0}")]
    UnknownType(String),

    #[error("Failed to store notification: {0}")]
    Persist(#[from] DomainError),
}

/// Result of handling one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Stored { notification_id: Uuid },
    DeadLettered { reason: String },
}

pub struct NotificationRelay {
    notifications: Arc<NotificationService>,
    mail: Arc<MailBridge>,
    dead_letters: Arc<dyn DeadLetterSink>,
}

impl NotificationRelay {
    pub fn new(
        notifications: Arc<NotificationService>,
        mail: Arc<MailBridge>,
        dead_letters: Arc<dyn DeadLetterSink>,
    ) -> Self {
        Self {
            notifications,
            mail,
            dead_letters,
        }
    }

    /// Handle a delivery then acknowledge it.
    ///
    /// An acknowledgement failure is only logged, the broker redelivers.
    pub async fn process<D>(&self, topic: RelayTopic, delivery: &D) -> RelayOutcome
    where
        D: InboundDelivery + ?Sized,
    {
        let outcome = self.handle(topic, delivery.payload()).await;

        if let Err(e) = delivery.ack().await {
            error!(topic = %topic, error = %e, "Failed to acknowledge message");
        }

        outcome
    }

    /// Turn a raw payload into a stored notification.
    ///
    /// Parse and persistence failures are recorded in the dead-letter sink.
    pub async fn handle(&self, topic: RelayTopic, payload: &[u8]) -> RelayOutcome {
        let result = match topic {
            RelayTopic::OrderCreated => self.handle_order(payload).await,
            RelayTopic::CustomizationRequested => self.handle_customization(payload).await,
        };

        match result {
            Ok(notification) => {
                info!(
                    topic = %topic,
                    notification_id = %notification.id,
                    "Relayed notification"
                );
                RelayOutcome::Stored {
                    notification_id: notification.id,
                }
            }
            Err(failure) => {
                let reason = failure.to_string();
                error!(topic = %topic, error = %reason, "Message processing failed");

                let letter = DeadLetter::new(topic.routing_key(), payload, reason.clone());
                if let Err(e) = self.dead_letters.record(&letter).await {
                    error!(topic = %topic, error = %e, "Failed to record dead letter");
                }
                RelayOutcome::DeadLettered { reason }
            }
        }
    }

    async fn handle_order(&self, payload: &[u8]) -> Result<Notification, RelayFailure> {
        let envelope: MessageEnvelope<OrderMessage> = parse(payload)?;
        let raw_kind = envelope
            .message
            .kind
            .clone()
            .or(envelope.kind)
            .unwrap_or_else(|| NotificationType::Order.to_string());
        let kind = raw_kind
            .parse::<NotificationType>()
            .map_err(|_| RelayFailure::UnknownType(raw_kind))?;

        let notification = self
            .notifications
            .store(envelope.message.into_notification(kind))
            .await?;
        Ok(notification)
    }

    async fn handle_customization(&self, payload: &[u8]) -> Result<Notification, RelayFailure> {
        let envelope: MessageEnvelope<CustomizationMessage> = parse(payload)?;
        let notification = self.notifications.store(envelope.message.into()).await?;

        if let Err(e) = self.mail.send_customization_emails(&notification).await {
            warn!(
                notification_id = %notification.id,
                error = %e,
                "Customization emails failed"
            );
        }
        Ok(notification)
    }
}

fn parse<T: DeserializeOwned>(payload: &[u8]) -> Result<MessageEnvelope<T>, RelayFailure> {
    Ok(serde_json::from_slice(payload)?)
}
