//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Bearer token verification
//! - `cache` - Redis deny-list cache
//! - `database` - MySQL connection pool
//! - `environment` - Environment detection and logging
//! - `i18n` - Supported locales
//! - `messaging` - RabbitMQ, outbound mail addressing and realtime push
//! - `server` - HTTP server and CORS

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod i18n;
pub mod messaging;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use i18n::I18nConfig;
pub use messaging::{AmqpConfig, MailConfig, RealtimeConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    pub amqp: AmqpConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub realtime: RealtimeConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::default(),
            i18n: I18nConfig::default(),
            amqp: AmqpConfig::default(),
            mail: MailConfig::default(),
            realtime: RealtimeConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let cors = if environment.is_production() {
            CorsConfig::from_env()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            i18n: I18nConfig::from_env(),
            amqp: AmqpConfig::from_env(),
            mail: MailConfig::from_env(),
            realtime: RealtimeConfig::from_env(),
            cors,
            logging: LoggingConfig::for_environment(environment),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable as a string, falling back to `default`
pub(crate) fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated environment value into trimmed, non-empty items
pub(crate) fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    })
}
