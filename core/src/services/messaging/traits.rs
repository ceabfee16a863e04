use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{DeadLetter, EmailJob};
use crate::errors::DomainError;

/// Event name of a realtime notification push
pub const NOTIFICATION_EVENT: &str = "notification";

/// Publishes email jobs for the mail worker
#[async_trait]
pub trait EmailJobPublisher: Send + Sync {
    async fn publish(&self, job: &EmailJob) -> Result<(), DomainError>;
}

/// Pushes events to connected dashboard clients
#[async_trait]
pub trait RealtimePublisher: Send + Sync {
    async fn push(&self, event: &str, data: &Value) -> Result<(), DomainError>;
}

/// Realtime publisher installed when pushes are disabled
pub struct NoopRealtimePublisher;

#[async_trait]
impl RealtimePublisher for NoopRealtimePublisher {
    async fn push(&self, _event: &str, _data: &Value) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Email bodies rendered by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailTemplate {
    ContactNotification,
    CustomizationConfirmation,
    CustomizationAlert,
}

impl EmailTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            EmailTemplate::ContactNotification => "contact-notification",
            EmailTemplate::CustomizationConfirmation => "customization-confirmation",
            EmailTemplate::CustomizationAlert => "customization-alert",
        }
    }

    pub fn all() -> [EmailTemplate; 3] {
        [
            EmailTemplate::ContactNotification,
            EmailTemplate::CustomizationConfirmation,
            EmailTemplate::CustomizationAlert,
        ]
    }
}

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: EmailTemplate, data: &Value) -> Result<String, DomainError>;
}

/// Records relay messages that could not be handled
#[async_trait]
pub trait DeadLetterSink: Send + Sync {
    async fn record(&self, letter: &DeadLetter) -> Result<(), DomainError>;
}

/// A message received from the broker
#[async_trait]
pub trait InboundDelivery: Send + Sync {
    fn payload(&self) -> &[u8];

    async fn ack(&self) -> Result<(), DomainError>;
}
