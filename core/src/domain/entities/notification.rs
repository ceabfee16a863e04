//! Notification entity and its listing page

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::ReadStatus;

/// Origin of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Order,
    Product,
    Contact,
    Customization,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Order => "order",
            NotificationType::Product => "product",
            NotificationType::Contact => "contact",
            NotificationType::Customization => "customization",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(NotificationType::Order),
            "product" => Ok(NotificationType::Product),
            "contact" => Ok(NotificationType::Contact),
            "customization" => Ok(NotificationType::Customization),
            other => Err(format!("unknown notification type: {}", other)),
        }
    }
}

/// Notification record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub image: Option<String>,
    pub status: ReadStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input of a notification creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub image: Option<String>,
    pub status: Option<ReadStatus>,
}

impl NewNotification {
    /// Minimal input, every optional field left empty
    pub fn new(kind: NotificationType, message: impl Into<String>) -> Self {
        Self {
            kind,
            order_id: None,
            product_id: None,
            user_id: None,
            name: None,
            email: None,
            phone: None,
            subject: None,
            message: message.into(),
            image: None,
            status: None,
        }
    }
}

impl Notification {
    pub fn new(input: NewNotification) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind: input.kind,
            order_id: input.order_id,
            product_id: input.product_id,
            user_id: input.user_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            subject: input.subject,
            message: input.message,
            image: input.image,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: ReadStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// One page of notifications with the counters shown by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub total_doc: u64,
    pub total_unread_doc: u64,
    pub notifications: Vec<Notification>,
}
