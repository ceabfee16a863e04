//! Relay message that could not be handled

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetter {
    pub topic: String,
    /// Raw payload, lossily decoded as UTF-8
    pub payload: String,
    pub reason: String,
    pub failed_at: DateTime<Utc>,
}

impl DeadLetter {
    pub fn new(topic: impl Into<String>, payload: &[u8], reason: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            payload: String::from_utf8_lossy(payload).into_owned(),
            reason: reason.into(),
            failed_at: Utc::now(),
        }
    }
}
