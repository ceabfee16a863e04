//! Language endpoints

use actix_web::{http::StatusCode, web, HttpResponse};

use setting_core::domain::entities::NewLanguage;

use crate::app::AppState;
use crate::dto::language::{CreateLanguageRequest, LanguageStatusRequest, UpdateLanguageRequest};
use crate::dto::{validate_request, BulkStatusResponse, BulkVisibilityRequest};
use crate::handlers::error::{bad_request, handle_domain_error_with_lang};
use crate::middleware::RequestLocale;

use super::{no_content, respond, IdPath, IdsPath};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/languages", web::post().to(add_language))
        .route("/languages", web::get().to(get_all_languages))
        .route("/languages/many", web::post().to(add_all_languages))
        .route("/languages/showing", web::get().to(get_showing_languages))
        .route(
            "/languages/update/many",
            web::put().to(update_many_language_status),
        )
        .route("/languages/{ids}", web::delete().to(delete_many_languages))
        .route("/language/{id}", web::get().to(get_language_by_id))
        .route("/language/{id}", web::put().to(update_language))
        .route("/language/{id}", web::delete().to(delete_language))
        .route("/language/{id}/status", web::put().to(update_language_status));
}

/// POST /languages
///
/// A name already in use is rejected with 409.
pub async fn add_language(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<CreateLanguageRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(e) = validate_request(&request) {
        return handle_domain_error_with_lang(&e, locale);
    }

    respond(
        state.languages.create(request.into()).await,
        StatusCode::CREATED,
        locale,
    )
}

/// POST /languages/many
pub async fn add_all_languages(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<Vec<CreateLanguageRequest>>,
) -> HttpResponse {
    let requests = body.into_inner();
    if let Some(e) = requests.iter().find_map(|r| validate_request(r).err()) {
        return handle_domain_error_with_lang(&e, locale);
    }

    let inputs: Vec<NewLanguage> = requests.into_iter().map(Into::into).collect();
    respond(
        state.languages.create_many(inputs).await,
        StatusCode::CREATED,
        locale,
    )
}

/// GET /languages
pub async fn get_all_languages(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.languages.list_all().await, StatusCode::OK, locale)
}

/// GET /languages/showing
pub async fn get_showing_languages(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.languages.list_showing().await, StatusCode::OK, locale)
}

pub async fn get_language_by_id(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
) -> HttpResponse {
    respond(state.languages.get(&path.id).await, StatusCode::OK, locale)
}

pub async fn update_language(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
    body: web::Json<UpdateLanguageRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(e) = validate_request(&request) {
        return handle_domain_error_with_lang(&e, locale);
    }

    respond(
        state.languages.update(&path.id, request.into()).await,
        StatusCode::OK,
        locale,
    )
}

pub async fn update_language_status(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
    body: web::Json<LanguageStatusRequest>,
) -> HttpResponse {
    if let Err(e) = validate_request(&*body) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let Some(status) = body.status else {
        return bad_request(locale);
    };

    respond(
        state.languages.update_status(&path.id, status).await,
        StatusCode::OK,
        locale,
    )
}

/// PUT /languages/update/many
pub async fn update_many_language_status(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<BulkVisibilityRequest>,
) -> HttpResponse {
    if let Err(e) = validate_request(&*body) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let request = body.into_inner();
    let (Some(ids), Some(status)) = (request.ids, request.status) else {
        return bad_request(locale);
    };

    let result = state
        .languages
        .update_many_status(&ids, status)
        .await
        .map(|modified_count| BulkStatusResponse { modified_count });
    respond(result, StatusCode::OK, locale)
}

pub async fn delete_language(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
) -> HttpResponse {
    no_content(state.languages.delete(&path.id).await, locale)
}

/// DELETE /languages/{ids}
pub async fn delete_many_languages(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdsPath>,
) -> HttpResponse {
    no_content(state.languages.delete_many(&path.split()).await, locale)
}
