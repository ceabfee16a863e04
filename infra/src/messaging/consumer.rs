//! Relay consumer loops
//!
//! One loop per topic. Each delivery goes through the relay and is acked by
//! it whatever the outcome.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use lapin::message::Delivery;
use lapin::options::{BasicAckOptions, BasicConsumeOptions};
use lapin::types::FieldTable;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use setting_core::errors::DomainError;
use setting_core::services::{InboundDelivery, NotificationRelay, RelayOutcome, RelayTopic};

use super::amqp::{declare_binding, AmqpConnection};
use super::topology::relay_binding;
use crate::InfrastructureError;

/// A lapin delivery seen through the relay's delivery contract
pub struct AmqpDelivery {
    delivery: Delivery,
}

impl AmqpDelivery {
    pub fn new(delivery: Delivery) -> Self {
        Self { delivery }
    }
}

#[async_trait]
impl InboundDelivery for AmqpDelivery {
    fn payload(&self) -> &[u8] {
        &self.delivery.data
    }

    async fn ack(&self) -> Result<(), DomainError> {
        self.delivery
            .acker
            .ack(BasicAckOptions::default())
            .await
            .map_err(|e| DomainError::from(InfrastructureError::from(e)))
    }
}

/// Consumer of one relay topic
pub struct RelayConsumer {
    amqp: Arc<AmqpConnection>,
    relay: Arc<NotificationRelay>,
    topic: RelayTopic,
}

impl RelayConsumer {
    pub fn new(amqp: Arc<AmqpConnection>, relay: Arc<NotificationRelay>, topic: RelayTopic) -> Self {
        Self { amqp, relay, topic }
    }

    /// Declare the topic's binding and consume until the stream ends
    pub async fn run(self) -> Result<(), InfrastructureError> {
        let binding = relay_binding(self.topic);
        let channel = self.amqp.consumer_channel().await?;
        declare_binding(&channel, &binding).await?;

        let consumer_tag = format!("setting-service.{}", binding.routing_key);
        let mut consumer = channel
            .basic_consume(
                binding.queue,
                &consumer_tag,
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await?;

        info!(topic = %self.topic, queue = binding.queue, "Relay consumer started");

        while let Some(next) = consumer.next().await {
            match next {
                Ok(delivery) => {
                    let delivery = AmqpDelivery::new(delivery);
                    if let RelayOutcome::DeadLettered { reason } =
                        self.relay.process(self.topic, &delivery).await
                    {
                        warn!(topic = %self.topic, %reason, "Relay message dead-lettered");
                    }
                }
                Err(e) => {
                    error!(topic = %self.topic, error = %e, "Relay consumer stream failed");
                    return Err(e.into());
                }
            }
        }

        warn!(topic = %self.topic, "Relay consumer stream ended");
        Ok(())
    }
}

/// Spawn one consumer loop per relay topic
pub fn spawn_relay_consumers(
    amqp: Arc<AmqpConnection>,
    relay: Arc<NotificationRelay>,
) -> Vec<JoinHandle<()>> {
    RelayTopic::all()
        .into_iter()
        .map(|topic| {
            let consumer = RelayConsumer::new(Arc::clone(&amqp), Arc::clone(&relay), topic);
            tokio::spawn(async move {
                if let Err(e) = consumer.run().await {
                    error!(topic = %topic, error = %e, "Relay consumer stopped");
                }
            })
        })
        .collect()
}
