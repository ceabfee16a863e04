//! Email job handed to the mail worker

use serde::{Deserialize, Serialize};

/// Job consumed by the mail worker, `body` is already rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailJob {
    pub sender_name: String,
    pub sender_email: String,
    pub receivers: Vec<String>,
    pub subject: String,
    pub body: String,
}
