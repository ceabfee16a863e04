//! Application state and factory
//!
//! This module holds the services shared by every worker and builds the
//! Actix-web application around them.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use setting_core::services::{
    AuthorizationGate, CurrencyService, LanguageService, NotificationService, SettingService,
};
use setting_shared::{error_numbers, ApiResponse};

use crate::config::HttpConfig;
use crate::handlers::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::i18n::t;
use crate::middleware::{create_cors, JwtAuth, LocaleResolver, RequestLocale};
use crate::routes::{self, docs::api_documentation};

/// Services shared by the request handlers
pub struct AppState {
    pub currencies: Arc<CurrencyService>,
    pub languages: Arc<LanguageService>,
    pub settings: Arc<SettingService>,
    pub notifications: Arc<NotificationService>,
}

impl AppState {
    pub fn new(
        currencies: Arc<CurrencyService>,
        languages: Arc<LanguageService>,
        settings: Arc<SettingService>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            currencies,
            languages,
            settings,
            notifications,
        }
    }
}

/// Create and configure the application with all dependencies
///
/// Middleware runs outermost first: access log, CORS, locale resolution,
/// then authorization. An unsupported `{lang}` is therefore rejected before
/// the token is looked up.
pub fn create_app(
    state: web::Data<AppState>,
    gate: Arc<AuthorizationGate>,
    config: &HttpConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let public_paths = config.public_paths();

    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(config.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // The last wrap is the outermost layer
        .wrap(JwtAuth::new(gate).with_public_paths(public_paths.clone()))
        .wrap(LocaleResolver::new(config.i18n.clone()).with_public_paths(public_paths))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        // Registered ahead of the `/v1/{lang}` scope which would claim it
        .route(&config.docs_path, web::get().to(api_documentation))
        .service(web::scope("/v1/{lang}").configure(routes::configure))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "setting-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found(RequestLocale(locale): RequestLocale) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failed(
        error_numbers::RESOURCE_NOT_FOUND,
        t(locale, "errors.route_not_found"),
    ))
}
