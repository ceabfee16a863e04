//! AMQP publishers of email jobs and dead letters

use std::sync::Arc;

use async_trait::async_trait;
use lapin::options::BasicPublishOptions;
use lapin::BasicProperties;
use serde::Serialize;
use tracing::{debug, error};

use setting_core::domain::entities::{DeadLetter, EmailJob};
use setting_core::domain::value_objects::MessageEnvelope;
use setting_core::errors::DomainError;
use setting_core::services::{DeadLetterSink, EmailJobPublisher};

use super::amqp::{declare_binding, declare_exchange, AmqpConnection};
use super::topology::{Binding, DEAD_LETTER, SEND_MAIL};
use crate::InfrastructureError;

/// Persistent delivery mode
const PERSISTENT: u8 = 2;

/// Serialize `message` in the platform envelope
pub(crate) fn envelope_bytes<T: Serialize>(
    routing_key: &str,
    message: &T,
) -> Result<Vec<u8>, InfrastructureError> {
    Ok(serde_json::to_vec(&MessageEnvelope::new(routing_key, message))?)
}

async fn publish(
    amqp: &AmqpConnection,
    binding: &Binding,
    declare_queue: bool,
    payload: &[u8],
) -> Result<(), InfrastructureError> {
    let channel = amqp.channel().await?;

    let result = async {
        if declare_queue {
            declare_binding(&channel, binding).await?;
        } else {
            declare_exchange(&channel, binding.exchange).await?;
        }

        channel
            .basic_publish(
                binding.exchange,
                binding.routing_key,
                BasicPublishOptions::default(),
                payload,
                BasicProperties::default()
                    .with_content_type("application/json".into())
                    .with_delivery_mode(PERSISTENT),
            )
            .await?
            .await?;
        Ok::<(), InfrastructureError>(())
    }
    .await;

    if result.is_err() {
        amqp.discard_channel().await;
    }
    result
}

/// Publishes email jobs to the mail worker's exchange
pub struct AmqpEmailPublisher {
    amqp: Arc<AmqpConnection>,
}

impl AmqpEmailPublisher {
    pub fn new(amqp: Arc<AmqpConnection>) -> Self {
        Self { amqp }
    }
}

#[async_trait]
impl EmailJobPublisher for AmqpEmailPublisher {
    async fn publish(&self, job: &EmailJob) -> Result<(), DomainError> {
        let payload = envelope_bytes(SEND_MAIL.routing_key, job)?;

        publish(&self.amqp, &SEND_MAIL, false, &payload)
            .await
            .map_err(|e| {
                error!(error = %e, subject = %job.subject, "Failed to publish email job");
                DomainError::from(e)
            })?;

        debug!(
            exchange = SEND_MAIL.exchange,
            receivers = job.receivers.len(),
            "Email job published"
        );
        Ok(())
    }
}

/// Records unhandled relay messages in a durable queue
pub struct AmqpDeadLetterSink {
    amqp: Arc<AmqpConnection>,
}

impl AmqpDeadLetterSink {
    pub fn new(amqp: Arc<AmqpConnection>) -> Self {
        Self { amqp }
    }
}

#[async_trait]
impl DeadLetterSink for AmqpDeadLetterSink {
    async fn record(&self, letter: &DeadLetter) -> Result<(), DomainError> {
        let payload = envelope_bytes(DEAD_LETTER.routing_key, letter)?;

        publish(&self.amqp, &DEAD_LETTER, true, &payload).await?;

        debug!(topic = %letter.topic, "Dead letter recorded");
        Ok(())
    }
}
