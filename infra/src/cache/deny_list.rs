//! Redis-backed token deny-list
//!
//! Every lookup holds one of `max_connections` permits for its duration, so
//! a burst of requests cannot open an unbounded number of in-flight
//! commands against Redis.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::warn;

use setting_core::errors::DomainError;
use setting_core::services::{DenyListLease, DenyListStore};

use super::redis_client::RedisClient;

/// Pooled deny-list over a shared Redis client
pub struct RedisDenyList {
    client: RedisClient,
    permits: Arc<Semaphore>,
    acquire_timeout: Duration,
}

impl RedisDenyList {
    pub fn new(client: RedisClient) -> Self {
        let max = client.config().max_connections.max(1) as usize;
        let acquire_timeout = Duration::from_secs(client.config().connection_timeout);
        Self {
            client,
            permits: Arc::new(Semaphore::new(max)),
            acquire_timeout,
        }
    }
}

#[async_trait]
impl DenyListStore for RedisDenyList {
    async fn acquire(&self) -> Result<Box<dyn DenyListLease>, DomainError> {
        let permit = tokio::time::timeout(
            self.acquire_timeout,
            Arc::clone(&self.permits).acquire_owned(),
        )
        .await
        .map_err(|_| {
            warn!(
                timeout_secs = self.acquire_timeout.as_secs(),
                "Timed out waiting for a deny-list lease"
            );
            DomainError::internal("Timed out waiting for a deny-list connection")
        })?
        .map_err(|e| DomainError::internal(format!("Deny-list pool closed: {}", e)))?;

        Ok(Box::new(RedisLease {
            client: self.client.clone(),
            _permit: permit,
        }))
    }
}

/// A deny-list lease, the permit returns to the pool on drop
struct RedisLease {
    client: RedisClient,
    _permit: OwnedSemaphorePermit,
}

#[async_trait]
impl DenyListLease for RedisLease {
    async fn get(&mut self, key: &str) -> Result<Option<String>, DomainError> {
        self.client
            .get(key)
            .await
            .map_err(|e| DomainError::internal(format!("Deny-list lookup failed: {}", e)))
    }

    fn release(self: Box<Self>) {
        drop(self);
    }
}
