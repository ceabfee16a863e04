//! Lazily established AMQP connection and channel
//!
//! One channel is shared by every publisher of the process. It is opened on
//! first use and re-opened only once the broker reports it closed.

use lapin::options::{ExchangeDeclareOptions, QueueBindOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties, ExchangeKind};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use setting_shared::AmqpConfig;

use super::topology::Binding;
use crate::InfrastructureError;

/// Process-wide AMQP handle
pub struct AmqpConnection {
    config: AmqpConfig,
    state: Mutex<ConnectionState>,
}

#[derive(Default)]
struct ConnectionState {
    connection: Option<Connection>,
    channel: Option<Channel>,
}

impl AmqpConnection {
    /// Create the handle, no network traffic happens until first use
    pub fn new(config: AmqpConfig) -> Self {
        Self {
            config,
            state: Mutex::new(ConnectionState::default()),
        }
    }

    /// Shared channel, opening the connection and channel when needed
    pub async fn channel(&self) -> Result<Channel, InfrastructureError> {
        let mut state = self.state.lock().await;

        if let Some(channel) = state.channel.as_ref() {
            if channel.status().connected() {
                return Ok(channel.clone());
            }
            warn!("AMQP channel is no longer usable, re-opening it");
            state.channel = None;
        }

        let channel = self.open_channel(&mut state).await?;
        state.channel = Some(channel.clone());
        Ok(channel)
    }

    /// Dedicated channel for a long-running consumer
    pub async fn consumer_channel(&self) -> Result<Channel, InfrastructureError> {
        let mut state = self.state.lock().await;
        self.open_channel(&mut state).await
    }

    async fn open_channel(&self, state: &mut ConnectionState) -> Result<Channel, InfrastructureError> {
        let connection = match state.connection.take() {
            Some(connection) if connection.status().connected() => connection,
            _ => self.connect().await?,
        };

        let opened = connection.create_channel().await;
        state.connection = Some(connection);

        let channel = opened?;
        debug!(channel_id = channel.id(), "AMQP channel opened");
        Ok(channel)
    }

    async fn connect(&self) -> Result<Connection, InfrastructureError> {
        info!(uri = %self.config.masked_uri(), "Connecting to RabbitMQ");

        let properties = ConnectionProperties::default()
            .with_connection_name(self.config.connection_name.clone().into());
        let connection = Connection::connect(&self.config.uri(), properties).await?;

        info!(
            connection_name = %self.config.connection_name,
            "Connected to RabbitMQ"
        );
        Ok(connection)
    }

    /// Drop the shared channel after a failed operation
    pub async fn discard_channel(&self) {
        self.state.lock().await.channel = None;
    }

    /// Close the connection if one was opened
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        state.channel = None;
        if let Some(connection) = state.connection.take() {
            if let Err(e) = connection.close(200, "shutdown").await {
                warn!(error = %e, "Failed to close RabbitMQ connection");
            }
        }
    }
}

/// Declare a durable direct exchange
pub async fn declare_exchange(channel: &Channel, exchange: &str) -> Result<(), InfrastructureError> {
    channel
        .exchange_declare(
            exchange,
            ExchangeKind::Direct,
            ExchangeDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;
    Ok(())
}

/// Declare the exchange and the durable queue of a binding, then bind them
pub async fn declare_binding(channel: &Channel, binding: &Binding) -> Result<(), InfrastructureError> {
    declare_exchange(channel, binding.exchange).await?;

    channel
        .queue_declare(
            binding.queue,
            QueueDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    channel
        .queue_bind(
            binding.queue,
            binding.exchange,
            binding.routing_key,
            QueueBindOptions::default(),
            FieldTable::default(),
        )
        .await?;

    debug!(
        exchange = binding.exchange,
        queue = binding.queue,
        routing_key = binding.routing_key,
        "AMQP binding declared"
    );
    Ok(())
}
