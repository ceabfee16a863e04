use serde::{Deserialize, Serialize};

use setting_shared::{AppConfig, CorsConfig, I18nConfig};

/// Settings consumed while building the HTTP application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Prefix served without token or locale checks
    pub docs_path: String,
    pub i18n: I18nConfig,
    pub cors: CorsConfig,
    pub max_payload_size: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for HttpConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            docs_path: config.server.docs_path.clone(),
            i18n: config.i18n.clone(),
            cors: config.cors.clone(),
            max_payload_size: config.server.max_payload_size,
        }
    }
}

impl HttpConfig {
    /// Prefixes reachable without a bearer token
    pub fn public_paths(&self) -> Vec<String> {
        vec![self.docs_path.clone(), "/health".to_string()]
    }
}
