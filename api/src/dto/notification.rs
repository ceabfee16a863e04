use serde::{Deserialize, Serialize};
use validator::Validate;

use setting_core::domain::entities::{NewNotification, NotificationType};
use setting_core::domain::value_objects::ReadStatus;
use setting_core::services::ContactOptions;
use setting_shared::Pagination;

/// Notification submitted over HTTP.
///
/// `receivers`, `appName` and `supportUrl` only address the contact email and
/// are not stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<NotificationType>,

    #[validate(required, length(min = 1))]
    pub message: Option<String>,

    pub order_id: Option<String>,
    pub product_id: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub subject: Option<String>,
    pub image: Option<String>,
    pub status: Option<ReadStatus>,

    pub receivers: Option<Vec<String>>,
    #[serde(rename = "appName")]
    pub app_name: Option<String>,
    #[serde(rename = "supportUrl")]
    pub support_url: Option<String>,
}

impl CreateNotificationRequest {
    /// Split into the stored input and the contact email addressing
    pub fn into_parts(self) -> (NewNotification, ContactOptions) {
        let kind = self.kind.unwrap_or(NotificationType::Contact);
        let mut input = NewNotification::new(kind, self.message.unwrap_or_default());
        input.order_id = self.order_id;
        input.product_id = self.product_id;
        input.user_id = self.user_id;
        input.name = self.name;
        input.email = self.email;
        input.phone = self.phone;
        input.subject = self.subject;
        input.image = self.image;
        input.status = self.status;

        let options = ContactOptions {
            receivers: self.receivers.filter(|receivers| !receivers.is_empty()),
            app_name: self.app_name,
            support_url: self.support_url,
        };
        (input, options)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationStatusRequest {
    #[validate(required)]
    pub status: Option<ReadStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkReadStatusRequest {
    #[validate(required, length(min = 1))]
    pub ids: Option<Vec<String>>,

    #[validate(required)]
    pub status: Option<ReadStatus>,
}

/// `?page=&limit=` of the notification listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NotificationListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<NotificationListQuery> for Pagination {
    fn from(query: NotificationListQuery) -> Self {
        let defaults = Pagination::default();
        Pagination::new(
            query.page.unwrap_or(defaults.page),
            query.limit.unwrap_or(defaults.limit),
        )
    }
}

/// Response of a single status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStatusResponse {
    /// Unread notifications remaining
    #[serde(rename = "totalDoc")]
    pub total_doc: u64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_request;

    #[test]
    fn test_contact_options_are_split_off() {
        let request: CreateNotificationRequest = serde_json::from_str(
            r#"{
                "type": "contact",
                "message": "Hello",
                "email": "visitor@example.com",
                "receivers": ["support@e-luxe.fr"],
                "appName": "E-LUXE"
            }"#,
        )
        .unwrap();
        assert!(validate_request(&request).is_ok());

        let (input, options) = request.into_parts();
        assert_eq!(input.kind, NotificationType::Contact);
        assert_eq!(input.email.as_deref(), Some("visitor@example.com"));
        assert_eq!(options.receivers, Some(vec!["support@e-luxe.fr".to_string()]));
        assert_eq!(options.app_name.as_deref(), Some("E-LUXE"));
        assert!(options.support_url.is_none());
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let request: CreateNotificationRequest =
            serde_json::from_str(r#"{"type": "contact", "message": "Hi", "email": "nope"}"#)
                .unwrap();
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn test_list_query_defaults_and_clamps() {
        let pagination = Pagination::from(NotificationListQuery::default());
        assert_eq!((pagination.page, pagination.limit), (1, 5));

        let pagination = Pagination::from(NotificationListQuery {
            page: Some(0),
            limit: Some(500),
        });
        assert_eq!((pagination.page, pagination.limit), (1, 100));
    }
}
