//! Bearer token verification configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Configuration for verifying tokens issued by the user service
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// RSA public key in PEM format
    #[serde(default)]
    pub public_key_pem: String,

    /// Clock skew tolerance in seconds
    #[serde(default)]
    pub leeway: u64,
}

impl AuthConfig {
    /// Create from `JWT_PUBLIC_KEY` and `JWT_LEEWAY`
    pub fn from_env() -> Self {
        let raw = std::env::var("JWT_PUBLIC_KEY")
            .or_else(|_| std::env::var("NODE_SERVER_PUBLIC_KEY"))
            .unwrap_or_default();

        Self {
            public_key_pem: unescape_pem(&raw),
            leeway: env_or("JWT_LEEWAY", 0),
        }
    }

    /// Create a configuration from a PEM string
    pub fn new(public_key_pem: impl Into<String>) -> Self {
        Self {
            public_key_pem: unescape_pem(&public_key_pem.into()),
            leeway: 0,
        }
    }

    /// Whether a public key has been configured
    pub fn has_public_key(&self) -> bool {
        !self.public_key_pem.trim().is_empty()
    }
}

/// Keys stored in single-line env files carry literal `\n` sequences
fn unescape_pem(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
