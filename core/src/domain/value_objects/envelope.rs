//! Envelope of every message exchanged over the platform's queues

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// `{logType, type?, message, dateTime}` wrapper
///
/// Producers set `logType` to the routing key they publish under. Some
/// producers also put the notification kind at the top level as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_type: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub message: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl<T> MessageEnvelope<T> {
    /// Wrap an outbound payload published under `routing_key`
    pub fn new(routing_key: impl Into<String>, message: T) -> Self {
        Self {
            log_type: Some(routing_key.into()),
            kind: None,
            message,
            date_time: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}
