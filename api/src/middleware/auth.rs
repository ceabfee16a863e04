//! Bearer token authentication middleware.
//!
//! Every request outside the public prefixes goes through the
//! [`AuthorizationGate`]: deny-list lookup first, then signature and expiry
//! verification. Decoded claims are injected into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use setting_core::domain::entities::Claims;
use setting_core::services::AuthorizationGate;

use crate::handlers::error::handle_domain_error_with_lang;
use crate::middleware::locale::{is_under, RequestLocale};

/// Decoded claims of the authenticated caller, stored in the request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: Claims,
}

/// Bearer token authentication middleware factory
pub struct JwtAuth {
    gate: Arc<AuthorizationGate>,
    public_paths: Rc<Vec<String>>,
}

impl JwtAuth {
    pub fn new(gate: Arc<AuthorizationGate>) -> Self {
        Self {
            gate,
            public_paths: Rc::new(Vec::new()),
        }
    }

    /// Prefixes served without a token
    pub fn with_public_paths(mut self, paths: Vec<String>) -> Self {
        self.public_paths = Rc::new(paths);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            gate: Arc::clone(&self.gate),
            public_paths: Rc::clone(&self.public_paths),
        }))
    }
}

/// Bearer token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    gate: Arc<AuthorizationGate>,
    public_paths: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
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

        // Public prefixes are checked before any header parsing
        if self.public_paths.iter().any(|prefix| is_under(req.path(), prefix)) {
            return Box::pin(async move {
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        let gate = Arc::clone(&self.gate);

        Box::pin(async move {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            match gate.authorize(header.as_deref()).await {
                Ok(claims) => {
                    tracing::debug!(
                        subject = ?claims.subject(),
                        path = %req.path(),
                        "Request authorized"
                    );
                    req.extensions_mut().insert(AuthContext { claims });
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(error) => {
                    let locale = req
                        .extensions()
                        .get::<RequestLocale>()
                        .map(|locale| locale.0)
                        .unwrap_or_default();
                    let response = handle_domain_error_with_lang(&error, locale);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpRequest, HttpResponse};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use setting_core::services::gate::MockDenyList;
    use setting_core::services::JwtVerifier;

    const SECRET: &[u8] = b"middleware-secret";

    async fn caller(req: HttpRequest) -> HttpResponse {
        let subject = req
            .extensions()
            .get::<AuthContext>()
            .and_then(|context| context.claims.subject());
        HttpResponse::Ok().body(subject.unwrap_or_default())
    }

    #[actix_web::test]
    async fn test_claims_are_attached_to_request() {
        let gate = Arc::new(AuthorizationGate::new(
            Arc::new(MockDenyList::new()),
            Arc::new(JwtVerifier::from_secret(SECRET, 0)),
        ));
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(gate))
                .route("/caller", web::get().to(caller)),
        )
        .await;
        let claims = json!({ "_id": "user-7", "exp": chrono::Utc::now().timestamp() + 3600 });
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();

        let req = test::TestRequest::get()
            .uri("/caller")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"user-7"));
    }
}
