//! Socket.IO publisher of realtime events
//!
//! The API gateway runs the Socket.IO server its browser clients listen on.
//! This service joins it as a client and emits every stored notification.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::FutureExt;
use rust_socketio::asynchronous::{Client, ClientBuilder};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use setting_core::errors::DomainError;
use setting_core::services::RealtimePublisher;
use setting_shared::RealtimeConfig;

use crate::InfrastructureError;

/// Emits events on a lazily opened socket to the gateway
pub struct SocketIoRealtimePublisher {
    gateway_url: String,
    timeout: Duration,
    client: Mutex<Option<Client>>,
}

impl SocketIoRealtimePublisher {
    /// The socket is opened on the first push and reopened after a failure
    pub fn new(config: &RealtimeConfig) -> Self {
        Self {
            gateway_url: config.gateway_url.clone(),
            timeout: Duration::from_secs(config.timeout),
            client: Mutex::new(None),
        }
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    async fn client(&self) -> Result<Client, InfrastructureError> {
        let mut slot = self.client.lock().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        debug!(gateway = %self.gateway_url, "Connecting to the realtime gateway");
        let connecting = ClientBuilder::new(self.gateway_url.as_str())
            .on("error", |payload, _| {
                async move { warn!(?payload, "Realtime gateway socket error") }.boxed()
            })
            .on("close", |_, _| {
                async move { info!("Disconnected from the realtime gateway") }.boxed()
            })
            .connect();

        let client = tokio::time::timeout(self.timeout, connecting)
            .await
            .map_err(|_| {
                InfrastructureError::Timeout(format!(
                    "connecting to the realtime gateway at {}",
                    self.gateway_url
                ))
            })??;

        info!(gateway = %self.gateway_url, "Connected to the realtime gateway");
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Drop the current socket, the next push reconnects
    async fn discard(&self) {
        if let Some(client) = self.client.lock().await.take() {
            if let Err(e) = client.disconnect().await {
                debug!(error = %e, "Failed to close the realtime gateway socket");
            }
        }
    }

    /// Close the socket on shutdown
    pub async fn close(&self) {
        self.discard().await;
    }

    #[cfg(test)]
    async fn is_connected(&self) -> bool {
        self.client.lock().await.is_some()
    }
}

#[async_trait]
impl RealtimePublisher for SocketIoRealtimePublisher {
    async fn push(&self, event: &str, data: &Value) -> Result<(), DomainError> {
        let client = self.client().await?;

        match tokio::time::timeout(self.timeout, client.emit(event, data.clone())).await {
            Ok(Ok(())) => {
                debug!(event, "Realtime event emitted");
                Ok(())
            }
            Ok(Err(e)) => {
                self.discard().await;
                Err(InfrastructureError::from(e).into())
            }
            Err(_) => {
                self.discard().await;
                Err(InfrastructureError::Timeout(format!("emitting realtime event {}", event)).into())
            }
        }
    }
}
