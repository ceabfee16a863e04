//! Currency endpoints
//!
//! Collection routes live under `/currencies`, single records under
//! `/currency/{id}`.

use actix_web::{http::StatusCode, web, HttpResponse};

use setting_core::domain::entities::NewCurrency;

use crate::app::AppState;
use crate::dto::currency::{
    CreateCurrencyRequest, CurrencyStatusRequest, LiveExchangeRatesRequest, UpdateCurrencyRequest,
};
use crate::dto::{validate_request, BulkStatusResponse, BulkVisibilityRequest};
use crate::handlers::error::{bad_request, handle_domain_error_with_lang};
use crate::middleware::RequestLocale;

use super::{no_content, respond, IdPath, IdsPath};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/currencies", web::post().to(add_currency))
        .route("/currencies", web::get().to(get_all_currencies))
        .route("/currencies/many", web::post().to(add_all_currencies))
        .route("/currencies/many", web::put().to(update_many_currency_status))
        .route("/currencies/showing", web::get().to(get_showing_currencies))
        .route("/currencies/{ids}", web::delete().to(delete_many_currencies))
        .route("/currency/{id}", web::get().to(get_currency_by_id))
        .route("/currency/{id}", web::put().to(update_currency))
        .route("/currency/{id}", web::delete().to(delete_currency))
        .route("/currency/{id}/status", web::put().to(update_currency_status))
        .route(
            "/currency/{id}/live-exchange-rates",
            web::put().to(update_live_exchange_rates),
        );
}

/// POST /currencies
pub async fn add_currency(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<CreateCurrencyRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(e) = validate_request(&request) {
        return handle_domain_error_with_lang(&e, locale);
    }

    let result = state.currencies.create(request.into()).await;
    respond(result, StatusCode::CREATED, locale)
}

/// POST /currencies/many
pub async fn add_all_currencies(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    body: web::Json<Vec<CreateCurrencyRequest>>,
) -> HttpResponse {
    let requests = body.into_inner();
    for request in &requests {
        if let Err(e) = validate_request(request) {
            return handle_domain_error_with_lang(&e, locale);
        }
    }

    let inputs: Vec<NewCurrency> = requests.into_iter().map(Into::into).collect();
    let result = state.currencies.create_many(inputs).await;
    respond(result, StatusCode::CREATED, locale)
}

/// GET /currencies
pub async fn get_all_currencies(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.currencies.list_all().await, StatusCode::OK, locale)
}

/// GET /currencies/showing
pub async fn get_showing_currencies(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
) -> HttpResponse {
    respond(state.currencies.list_showing().await, StatusCode::OK, locale)
}

/// GET /currency/{id}
pub async fn get_currency_by_id(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
) -> HttpResponse {
    respond(state.currencies.get(&path.id).await, StatusCode::OK, locale)
}

/// PUT /currency/{id}
pub async fn update_currency(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
    body: web::Json<UpdateCurrencyRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(e) = validate_request(&request) {
        return handle_domain_error_with_lang(&e, locale);
    }

    let result = state.currencies.update(&path.id, request.into()).await;
    respond(result, StatusCode::OK, locale)
}

/// PUT /currency/{id}/status
///
/// Live exchange rates follow the new status.
pub async fn update_currency_status(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
    body: web::Json<CurrencyStatusRequest>,
) -> HttpResponse {
    if let Err(e) = validate_request(&*body) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let Some(status) = body.status else {
        return bad_request(locale);
    };

    let result = state.currencies.update_status(&path.id, status).await;
    respond(result, StatusCode::OK, locale)
}

/// PUT /currency/{id}/live-exchange-rates
pub async fn update_live_exchange_rates(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
    body: web::Json<LiveExchangeRatesRequest>,
) -> HttpResponse {
    if let Err(e) = validate_request(&*body) {
        return handle_domain_error_with_lang(&e, locale);
    }
    let Some(live_exchange_rates) = body.live_exchange_rates else {
        return bad_request(locale);
    };

    let result = state
        .currencies
        .update_live_exchange_rates(&path.id, live_exchange_rates)
        .await;
    respond(result, StatusCode::OK, locale)
}

/// PUT /currencies/many
pub async fn update_many_currency_status(
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
        .currencies
        .update_many_status(&ids, status)
        .await
        .map(|modified_count| BulkStatusResponse { modified_count });
    respond(result, StatusCode::OK, locale)
}

/// DELETE /currency/{id}
pub async fn delete_currency(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdPath>,
) -> HttpResponse {
    no_content(state.currencies.delete(&path.id).await, locale)
}

/// DELETE /currencies/{ids}
pub async fn delete_many_currencies(
    state: web::Data<AppState>,
    RequestLocale(locale): RequestLocale,
    path: web::Path<IdsPath>,
) -> HttpResponse {
    no_content(state.currencies.delete_many(&path.split()).await, locale)
}
