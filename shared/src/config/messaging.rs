//! Message queue, outbound mail and realtime push configuration

use serde::{Deserialize, Serialize};

use super::{env_list, env_or, env_string};

/// RabbitMQ connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AmqpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    #[serde(default = "default_vhost")]
    pub vhost: String,
    /// Connection name shown in the broker's management UI
    #[serde(default = "default_connection_name")]
    pub connection_name: String,
}

impl Default for AmqpConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: 5672,
            user: String::from("guest"),
            password: String::from("guest"),
            vhost: default_vhost(),
            connection_name: default_connection_name(),
        }
    }
}

impl AmqpConfig {
    /// Create from `RABBITMQ_*` variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_string("RABBITMQ_HOST", &defaults.host),
            port: env_or("RABBITMQ_PORT", defaults.port),
            user: env_string("RABBITMQ_USER", &defaults.user),
            password: env_string("RABBITMQ_PASSWORD", &defaults.password),
            vhost: env_string("RABBITMQ_VHOST", &defaults.vhost),
            connection_name: defaults.connection_name,
        }
    }

    /// AMQP URI including credentials
    pub fn uri(&self) -> String {
        format!(
            "amqp://{}:{}@{}:{}/{}",
            self.user,
            self.password,
            self.host,
            self.port,
            encode_vhost(&self.vhost)
        )
    }

    /// AMQP URI safe for logging
    pub fn masked_uri(&self) -> String {
        format!(
            "amqp://****@{}:{}/{}",
            self.host,
            self.port,
            encode_vhost(&self.vhost)
        )
    }
}

/// The default vhost `/` must be percent-encoded in the URI path
fn encode_vhost(vhost: &str) -> String {
    vhost.replace('/', "%2f")
}

/// Addressing of outbound email jobs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    pub sender_name: String,
    pub sender_email: String,
    /// Receivers of internal alerts (customization requests)
    #[serde(default)]
    pub support_receivers: Vec<String>,
    /// Product name rendered into templates
    pub app_name: String,
    /// Support link rendered into templates
    pub support_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            sender_name: String::from("E-LUXE"),
            sender_email: String::from("contact@e-luxe.fr"),
            support_receivers: vec![],
            app_name: String::from("E-LUXE"),
            support_url: String::from("#"),
        }
    }
}

impl MailConfig {
    /// Create from `MAIL_*`, `APP_NAME` and `SUPPORT_URL`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sender_name: env_string("MAIL_SENDER_NAME", &defaults.sender_name),
            sender_email: env_string("MAIL_SENDER_EMAIL", &defaults.sender_email),
            support_receivers: env_list("MAIL_SUPPORT_RECEIVERS").unwrap_or_default(),
            app_name: env_string("APP_NAME", &defaults.app_name),
            support_url: env_string("SUPPORT_URL", &defaults.support_url),
        }
    }
}

/// Realtime push towards the API gateway's Socket.IO server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RealtimeConfig {
    pub enabled: bool,
    pub gateway_url: String,
    /// Connect and emit timeout in seconds
    pub timeout: u64,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gateway_url: String::from("http://localhost:3000"),
            timeout: 5,
        }
    }
}

impl RealtimeConfig {
    /// Create from `API_GATEWAY_URL`, `REALTIME_PUSH_ENABLED` and `REALTIME_PUSH_TIMEOUT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_or("REALTIME_PUSH_ENABLED", defaults.enabled),
            gateway_url: env_string("API_GATEWAY_URL", &defaults.gateway_url),
            timeout: env_or("REALTIME_PUSH_TIMEOUT", defaults.timeout),
        }
    }
}

fn default_vhost() -> String {
    String::from("/")
}

fn default_connection_name() -> String {
    String::from("setting-service")
}
