//! Notification endpoints

use actix_web::{http::StatusCode, web, HttpResponse};

use setting_core::domain::value_objects::ReadStatus;

use crate::app::AppState;
use crate::dto::notification::{
    BulkReadStatusRequest, CreateNotificationRequest, NotificationListQuery,
    NotificationStatusRequest, NotificationStatusResponse,
};
use crate::dto::{validate_request, BulkStatusResponse};
use crate::handlers::error::{bad_request, handle_domain_error_with_lang};
use crate::i18n::t;
use crate::middleware::RequestLocale;

use super::{no_content, respond, IdPath, IdsPath};

/// `{productId}` path segment
#[derive(Debug, serde::Deserialize)]
pub struct ProductPath {
    #[serde(rename = "productId")]
    pub product_id: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/notifications", web::post().to(add_notification))
        .route("/notifications", web::get().to(get_all_notifications))
        .route(
            "/notifications/many",
            web::put().to(update_many_notification_status),
        )
        .route(
            "/notifications/{ids}/many",
            web::delete().to(delete_many_notifications),
        )
        .route(
            "/notification/product/{productId}",
            web::delete().to(delete_notification_by_product_id),
        )
        .route("/notification/{id}", web::get().to(get_notification_by_id))
        .route("/notification/{id}", web::delete().to(delete_notification))
        .route(
            "/notification/{id}/status",
            web::put().to(update_notification_status),
        );
}

/// POST /notifications
///
/// A `contact` notification also forwards the form by email. Email failures
/// are logged and do not change the response.
pub async fn add_notification(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<CreateNotificationRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(e) = validate_request(&request) {
        return handle_domain_error_with_lang(&e, locale);
    }

    let (input, options) = request.into_parts();
    respond(
        state.notifications.create(input, &options).await,
        StatusCode::CREATED,
        locale,
    )
}

/// GET /notifications?page=&limit=
pub async fn get_all_notifications(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    query: web::Query<NotificationListQuery>,
) -> HttpResponse {
    let pagination = query.into_inner().into();
    respond(
        state.notifications.list(pagination).await,
        StatusCode::OK,
        locale,
    )
}

pub async fn get_notification_by_id(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
) -> HttpResponse {
    respond(
        state.notifications.get(&path.id).await,
        StatusCode::OK,
        locale,
    )
}

/// PUT /notification/{id}/status
///
/// Responds with the unread count left after the change.
pub async fn update_notification_status(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
    body: web::Json<NotificationStatusRequest>,
) -> HttpResponse {
    if let Err(e) = validate_request(&*body) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let Some(status) = body.status else {
        return bad_request(locale);
    };

    let message_key = match status {
        ReadStatus::Read => "messages.notification_read",
        ReadStatus::Unread => "messages.notification_unread",
    };
    let result = state
        .notifications
        .update_status(&path.id, status)
        .await
        .map(|unread| NotificationStatusResponse {
            total_doc: unread,
            message: t(locale, message_key),
        });
    respond(result, StatusCode::OK, locale)
}

/// PUT /notifications/many
pub async fn update_many_notification_status(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<BulkReadStatusRequest>,
) -> HttpResponse {
    if let Err(e) = validate_request(&*body) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let request = body.into_inner();
    let (Some(ids), Some(status)) = (request.ids, request.status) else {
        return bad_request(locale);
    };

    let result = state
        .notifications
        .update_many_status(&ids, status)
        .await
        .map(|modified_count| BulkStatusResponse { modified_count });
    respond(result, StatusCode::OK, locale)
}

pub async fn delete_notification(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
) -> HttpResponse {
    no_content(state.notifications.delete(&path.id).await, locale)
}

/// DELETE /notification/product/{productId}
pub async fn delete_notification_by_product_id(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<ProductPath>,
) -> HttpResponse {
    no_content(
        state
            .notifications
            .delete_by_product_id(&path.product_id)
            .await,
        locale,
    )
}

/// DELETE /notifications/{ids}/many
pub async fn delete_many_notifications(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdsPath>,
) -> HttpResponse {
    no_content(state.notifications.delete_many(&path.split()).await, locale)
}
