//! Conversion of domain errors into the failure envelope
//!
//! | error                | HTTP | errNo |
//! |----------------------|------|-------|
//! | validation           | 412  | 6     |
//! | invalid token        | 401  | 11    |
//! | missing token        | 401  | 14    |
//! | not found            | 404  | 26    |
//! | invalid identifier   | 400  | 27    |
//! | unsupported locale   | 400  | 259   |
//! | already exists       | 409  | 260   |
//! | internal             | 500  | 259   |

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpMessage, HttpRequest, HttpResponse,
};
use serde_json::Value;

use setting_core::errors::DomainError;
use setting_shared::{error_numbers, ApiResponse, Locale};

use crate::i18n::{t, t_resource};
use crate::middleware::locale::RequestLocale;

/// HTTP status and platform error number of a domain error
pub fn error_status(error: &DomainError) -> (StatusCode, u32) {
    match error {
        DomainError::Validation(_) => (StatusCode::PRECONDITION_FAILED, error_numbers::VALIDATOR),
        DomainError::Token(token) if token.is_missing() => {
            (StatusCode::UNAUTHORIZED, error_numbers::TOKEN_NOT_FOUND)
        }
        DomainError::Token(_) => (StatusCode::UNAUTHORIZED, error_numbers::INVALID_TOKEN),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_numbers::RESOURCE_NOT_FOUND),
        DomainError::InvalidIdentifier { .. } => {
            (StatusCode::BAD_REQUEST, error_numbers::INVALID_RESOURCE)
        }
        DomainError::UnsupportedLocale { .. } => {
            (StatusCode::BAD_REQUEST, error_numbers::GENERIC_ERROR)
        }
        DomainError::AlreadyExists { .. } => {
            (StatusCode::CONFLICT, error_numbers::RESOURCE_ALREADY_EXISTS)
        }
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_numbers::GENERIC_ERROR)
        }
    }
}

/// Localized `errMsg` of a domain error
fn error_message(error: &DomainError, locale: Locale) -> Value {
    let message = match error {
        DomainError::Validation(validation) => {
            return serde_json::to_value(validation.field_messages()).unwrap_or_default()
        }
        DomainError::Token(token) if token.is_missing() => t(locale, "errors.token_not_found"),
        DomainError::Token(_) => t(locale, "errors.invalid_token"),
        DomainError::NotFound { resource } => t_resource(locale, "errors.not_found", *resource),
        DomainError::InvalidIdentifier { resource, .. } => {
            t_resource(locale, "errors.invalid_identifier", *resource)
        }
        DomainError::AlreadyExists { resource } => {
            t_resource(locale, "errors.already_exists", *resource)
        }
        DomainError::UnsupportedLocale { .. } => t(locale, "errors.unsupported_locale"),
        DomainError::Internal { .. } => t(locale, "errors.generic"),
    };
    Value::String(message)
}

/// Handle domain errors with language support
pub fn handle_domain_error_with_lang(error: &DomainError, locale: Locale) -> HttpResponse {
    let (status, err_no) = error_status(error);

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(ApiResponse::failed_with(err_no, error_message(error, locale)))
}

/// 400 `GenericError` with a localized message
pub fn bad_request(locale: Locale) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::failed(
        error_numbers::GENERIC_ERROR,
        t(locale, "errors.bad_request"),
    ))
}

/// Locale stored by the resolver, or the default outside of `/v1/{lang}`
fn request_locale(req: &HttpRequest) -> Locale {
    req.extensions()
        .get::<RequestLocale>()
        .map(|locale| locale.0)
        .unwrap_or_default()
}

/// Malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected JSON body");
    InternalError::from_response(err, bad_request(request_locale(req))).into()
}

/// Malformed query strings
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    InternalError::from_response(err, bad_request(request_locale(req))).into()
}

/// Path segments that do not deserialize
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected path");
    InternalError::from_response(err, bad_request(request_locale(req))).into()
}
