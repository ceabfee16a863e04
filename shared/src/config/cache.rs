//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_string};

/// Redis configuration for the token deny-list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Maximum number of concurrent deny-list leases
    pub max_connections: u32,

    /// Seconds to wait for a free lease before failing the check
    pub connection_timeout: u64,

    /// Key prefix of revoked tokens
    #[serde(default = "default_deny_list_prefix")]
    pub deny_list_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            max_connections: 10,
            connection_timeout: 5,
            deny_list_prefix: default_deny_list_prefix(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_URL` wins over `REDIS_HOST`/`REDIS_PORT`.
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| {
            format!(
                "redis://{}:{}",
                env_string("REDIS_HOST", "localhost"),
                env_or("REDIS_PORT", 6379u16)
            )
        });

        Self {
            url,
            max_connections: env_or("REDIS_MAX_CONNECTIONS", 10),
            connection_timeout: env_or("REDIS_CONNECTION_TIMEOUT", 5),
            deny_list_prefix: env_string("DENY_LIST_PREFIX", &default_deny_list_prefix()),
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the number of concurrent leases
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }
}

fn default_deny_list_prefix() -> String {
    String::from("bl_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_default_deny_list_prefix() {
        assert_eq!(CacheConfig::default().deny_list_prefix, "bl_");
    }

    #[test]
    fn test_max_connections_never_zero() {
        let config = CacheConfig::new("redis://cache:6379").with_max_connections(0);
        assert_eq!(config.max_connections, 1);
    }
}
