//! Setting document endpoints
//!
//! `globalSetting`, `storeSetting` and `storeCustomizationSetting` are read
//! and patched by name. Patches are deep-merged into the stored document.

use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::Value;

use setting_shared::Locale;

use crate::app::AppState;
use crate::dto::setting::{CustomizationQuery, StoreSettingRequest, UpdateSettingRequest};
use crate::dto::validate_request;
use crate::handlers::error::{bad_request, handle_domain_error_with_lang};
use crate::middleware::RequestLocale;

use super::respond;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/setting", web::post().to(add_setting))
        .route("/setting/global", web::get().to(get_global_setting))
        .route("/setting/global", web::put().to(update_global_setting))
        .route("/setting/store-setting", web::get().to(get_store_setting))
        .route("/setting/store-setting", web::put().to(update_store_setting))
        .route("/setting/store/seo", web::get().to(get_store_seo_setting))
        .route(
            "/setting/store/customization",
            web::get().to(get_store_customization_setting),
        )
        .route(
            "/setting/store/customization",
            web::put().to(update_store_customization_setting),
        );
}

/// POST /setting
pub async fn add_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<StoreSettingRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(e) = validate_request(&request) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let (Some(name), Some(setting)) = (request.name, request.setting) else {
        return bad_request(locale);
    };

    respond(
        state.settings.store(&name, setting).await,
        StatusCode::CREATED,
        locale,
    )
}

pub async fn get_global_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.settings.get_global().await, StatusCode::OK, locale)
}

pub async fn get_store_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.settings.get_store().await, StatusCode::OK, locale)
}

pub async fn get_store_seo_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.settings.get_store_seo().await, StatusCode::OK, locale)
}

/// GET /setting/store/customization?key=&keyTwo=
pub async fn get_store_customization_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    query: web::Query<CustomizationQuery>,
) -> HttpResponse {
    let result = state
        .settings
        .get_store_customization(query.key.as_deref(), query.key_two.as_deref())
        .await;
    respond(result, StatusCode::OK, locale)
}

/// PUT /setting/global
///
/// The default currency fields are resolved from `default_currency_symbol`.
pub async fn update_global_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<UpdateSettingRequest>,
) -> HttpResponse {
    let patch = match patch_of(body.into_inner(), locale) {
        Ok(patch) => patch,
        Err(response) => return response,
    };
    let result = state
        .settings
        .update_global(patch)
        .await
        .map(|setting| setting.setting);
    respond(result, StatusCode::OK, locale)
}

pub async fn update_store_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<UpdateSettingRequest>,
) -> HttpResponse {
    let patch = match patch_of(body.into_inner(), locale) {
        Ok(patch) => patch,
        Err(response) => return response,
    };
    let result = state
        .settings
        .update_store(patch)
        .await
        .map(|setting| setting.setting);
    respond(result, StatusCode::OK, locale)
}

pub async fn update_store_customization_setting(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<UpdateSettingRequest>,
) -> HttpResponse {
    let patch = match patch_of(body.into_inner(), locale) {
        Ok(patch) => patch,
        Err(response) => return response,
    };
    let result = state
        .settings
        .update_store_customization(patch)
        .await
        .map(|setting| setting.setting);
    respond(result, StatusCode::OK, locale)
}

/// The `setting` object of an update body
fn patch_of(request: UpdateSettingRequest, locale: Locale) -> Result<Value, HttpResponse> {
    validate_request(&request).map_err(|e| handle_domain_error_with_lang(&e, locale))?;
    request.setting.ok_or_else(|| bad_request(locale))
}
