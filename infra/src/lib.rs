//! # Infrastructure Layer
//!
//! Concrete adapters behind the `setting_core` contracts:
//! - **Database**: MySQL repositories using SQLx, with embedded migrations
//! - **Cache**: Redis client and the pooled token deny-list
//! - **Messaging**: AMQP publishers and relay consumers using lapin
//! - **Templates**: Handlebars email bodies
//! - **Realtime**: Socket.IO push of notifications to the API gateway

use setting_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and the token deny-list
pub mod cache;

/// Messaging module - AMQP connection, publishers and consumers
pub mod messaging;

/// Realtime push through the API gateway
pub mod realtime;

/// Email templates
pub mod templates;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// AMQP broker error
    #[error("Messaging error: {0}")]
    Messaging(#[from] lapin::Error),

    /// Socket.IO error towards the realtime gateway
    #[error("Realtime gateway error: {0}")]
    Realtime(#[from] rust_socketio::Error),

    /// An external call did not answer in time
    #[error("Timed out {0}")]
    Timeout(String),

    /// Payload serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template registration or rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
