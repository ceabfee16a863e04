//! Locale resolver middleware
//!
//! Reads `{lang}` from `/v1/{lang}/...`, rejects codes outside the supported
//! set and stores the resolved locale in the request extensions. Paths under
//! one of the public prefixes are passed through untouched.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use setting_core::errors::DomainError;
use setting_shared::{I18nConfig, Locale};

use crate::handlers::error::handle_domain_error_with_lang;

/// Locale of the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

/// Extractor falling back to the default locale outside of `/v1/{lang}`
impl FromRequest for RequestLocale {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let locale = req
            .extensions()
            .get::<RequestLocale>()
            .copied()
            .unwrap_or(RequestLocale(Locale::default()));
        ready(Ok(locale))
    }
}

/// Locale code of a `/v1/{lang}/...` path
pub fn path_locale_code(path: &str) -> Option<&str> {
    let mut segments = path.trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("v1"), Some(code)) if !code.is_empty() => Some(code),
        _ => None,
    }
}

/// Whether `path` equals `prefix` or lies below it
pub fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    !prefix.is_empty()
        && path.starts_with(prefix)
        && matches!(path.as_bytes().get(prefix.len()), None | Some(b'/'))
}

/// Locale resolver middleware factory
pub struct LocaleResolver {
    config: Rc<I18nConfig>,
    public_paths: Rc<Vec<String>>,
}

impl LocaleResolver {
    pub fn new(config: I18nConfig) -> Self {
        Self {
            config: Rc::new(config),
            public_paths: Rc::new(Vec::new()),
        }
    }

    /// Prefixes exempt from locale checks
    pub fn with_public_paths(mut self, paths: Vec<String>) -> Self {
        self.public_paths = Rc::new(paths);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for LocaleResolver
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = LocaleResolverMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleResolverMiddleware {
            service: Rc::new(service),
            config: Rc::clone(&self.config),
            public_paths: Rc::clone(&self.public_paths),
        }))
    }
}

/// Locale resolver middleware service
pub struct LocaleResolverMiddleware<S> {
    service: Rc<S>,
    config: Rc<I18nConfig>,
    public_paths: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for LocaleResolverMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let default_locale = self.config.default_locale;

        let public = self
            .public_paths
            .iter()
            .any(|prefix| is_under(req.path(), prefix));

        let resolved = match path_locale_code(req.path()) {
            _ if public => Ok(default_locale),
            Some(code) => self.config.resolve(code).ok_or_else(|| code.to_string()),
            None => Ok(default_locale),
        };

        Box::pin(async move {
            match resolved {
                Ok(locale) => {
                    req.extensions_mut().insert(RequestLocale(locale));
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(code) => {
                    tracing::debug!(code = %code, path = %req.path(), "Unsupported locale");
                    let response: HttpResponse = handle_domain_error_with_lang(
                        &DomainError::UnsupportedLocale { code },
                        default_locale,
                    );
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
