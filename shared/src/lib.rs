//! Shared configuration and common types for the setting service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The response envelope and platform error numbers
//! - Locale and pagination types
//! - Identifier validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AmqpConfig, AppConfig, AuthConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment,
    I18nConfig, MailConfig, RealtimeConfig, ServerConfig,
};
pub use errors::error_numbers;
pub use types::{ApiResponse, ErrorBody, Locale, Pagination, ResponseStatus};
