//! Inner `message` of the relay envelopes

use serde::Deserialize;

use crate::domain::entities::{NewNotification, NotificationType};

/// Order service notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderMessage {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl OrderMessage {
    pub fn into_notification(self, kind: NotificationType) -> NewNotification {
        let mut input = NewNotification::new(kind, self.message);
        input.order_id = self.order_id;
        input.user_id = self.user_id;
        input
    }
}

/// Product service customization request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomizationMessage {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<CustomizationMessage> for NewNotification {
    fn from(message: CustomizationMessage) -> Self {
        let mut input = NewNotification::new(NotificationType::Customization, message.message);
        input.product_id = message.product_id;
        input.user_id = message.user_id;
        input.name = message.name;
        input.email = message.email;
        input.phone = message.phone;
        input.subject = message.subject;
        input.image = message.image;
        input
    }
}
