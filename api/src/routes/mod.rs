//! Route handlers of the `/v1/{lang}` surface
//!
//! Handlers receive the request locale from [`crate::middleware::RequestLocale`] and turn domain
//! errors into the failure envelope through
//! [`handle_domain_error_with_lang`].

pub mod currency;
pub mod docs;
pub mod language;
pub mod notification;
pub mod setting;

use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};

use setting_core::errors::DomainResult;
use setting_shared::{ApiResponse, Locale};

use crate::handlers::error::handle_domain_error_with_lang;

/// `{id}` path segment
#[derive(Debug, Deserialize)]
pub struct IdPath {
    pub id: String,
}

/// Comma separated `{ids}` path segment
#[derive(Debug, Deserialize)]
pub struct IdsPath {
    pub ids: String,
}

impl IdsPath {
    pub fn split(&self) -> Vec<String> {
        setting_shared::utils::split_ids(&self.ids)
    }
}

/// Register every resource route on the `/v1/{lang}` scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    currency::configure(cfg);
    language::configure(cfg);
    setting::configure(cfg);
    notification::configure(cfg);
}

/// Success envelope with `status`, failure envelope otherwise
pub(crate) fn respond<T: Serialize>(
    result: DomainResult<T>,
    status: StatusCode,
    locale: Locale,
) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::build(status).json(ApiResponse::ok(data)),
        Err(error) => handle_domain_error_with_lang(&error, locale),
    }
}

/// 204 on success, failure envelope otherwise
pub(crate) fn no_content<T>(result: DomainResult<T>, locale: Locale) -> HttpResponse {
    match result {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error_with_lang(&error, locale),
    }
}
