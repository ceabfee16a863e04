//! Recording doubles for the messaging contracts

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::{DeadLetter, EmailJob};
use crate::errors::DomainError;

use super::traits::{
    DeadLetterSink, EmailJobPublisher, EmailTemplate, InboundDelivery, RealtimePublisher,
    TemplateRenderer,
};

/// Polling budget of the `wait_for_*` helpers, side effects run on spawned tasks
const WAIT_ROUNDS: usize = 200;
const WAIT_STEP: Duration = Duration::from_millis(5);

/// Records every publish attempt, `failing()` rejects them after recording
#[derive(Clone, Default)]
pub struct RecordingEmailPublisher {
    jobs: Arc<RwLock<Vec<EmailJob>>>,
    fail: bool,
}

impl RecordingEmailPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn jobs(&self) -> Vec<EmailJob> {
        self.jobs.read().await.clone()
    }

    /// Jobs recorded once at least `count` arrived, or when the budget runs out
    pub async fn wait_for_jobs(&self, count: usize) -> Vec<EmailJob> {
        for _ in 0..WAIT_ROUNDS {
            if self.jobs.read().await.len() >= count {
                break;
            }
            tokio::time::sleep(WAIT_STEP).await;
        }
        self.jobs().await
    }
}

#[async_trait]
impl EmailJobPublisher for RecordingEmailPublisher {
    async fn publish(&self, job: &EmailJob) -> Result<(), DomainError> {
        self.jobs.write().await.push(job.clone());
        if self.fail {
            return Err(DomainError::internal("broker unreachable"));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingRealtimePublisher {
    events: Arc<RwLock<Vec<(String, Value)>>>,
    fail: bool,
}

impl RecordingRealtimePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn events(&self) -> Vec<(String, Value)> {
        self.events.read().await.clone()
    }

    pub async fn wait_for_events(&self, count: usize) -> Vec<(String, Value)> {
        for _ in 0..WAIT_ROUNDS {
            if self.events.read().await.len() >= count {
                break;
            }
            tokio::time::sleep(WAIT_STEP).await;
        }
        self.events().await
    }
}

#[async_trait]
impl RealtimePublisher for RecordingRealtimePublisher {
    async fn push(&self, event: &str, data: &Value) -> Result<(), DomainError> {
        self.events.write().await.push((event.to_string(), data.clone()));
        if self.fail {
            return Err(DomainError::internal("gateway unreachable"));
        }
        Ok(())
    }
}

/// Renders `<template name>: <data as JSON>`
pub struct StaticTemplateRenderer;

impl TemplateRenderer for StaticTemplateRenderer {
    fn render(&self, template: EmailTemplate, data: &Value) -> Result<String, DomainError> {
        Ok(format!("{}: {}", template.name(), data))
    }
}

#[derive(Clone, Default)]
pub struct RecordingDeadLetterSink {
    letters: Arc<RwLock<Vec<DeadLetter>>>,
    fail: bool,
}

impl RecordingDeadLetterSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn letters(&self) -> Vec<DeadLetter> {
        self.letters.read().await.clone()
    }
}

#[async_trait]
impl DeadLetterSink for RecordingDeadLetterSink {
    async fn record(&self, letter: &DeadLetter) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::internal("dead-letter exchange unavailable"));
        }
        self.letters.write().await.push(letter.clone());
        Ok(())
    }
}

/// Delivery counting its acknowledgements
pub struct MockDelivery {
    payload: Vec<u8>,
    acks: Arc<AtomicUsize>,
}

impl MockDelivery {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            acks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared ack counter, readable after the delivery is consumed
    pub fn ack_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.acks)
    }
}

#[async_trait]
impl InboundDelivery for MockDelivery {
    fn payload(&self) -> &[u8] {
        &self.payload
    }

    async fn ack(&self) -> Result<(), DomainError> {
        self.acks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
