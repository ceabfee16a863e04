//! Shared fixtures for the HTTP integration tests
//!
//! The application is built around the in-memory repositories and an HS256
//! verifier so that tokens can be signed locally.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use setting_api::AppState;
use setting_core::repositories::{
    MockCurrencyRepository, MockLanguageRepository, MockNotificationRepository,
    MockSettingRepository,
};
use setting_core::services::gate::MockDenyList;
use setting_core::services::messaging::{
    RecordingEmailPublisher, RecordingRealtimePublisher, StaticTemplateRenderer,
};
use setting_core::services::{
    AuthorizationGate, CurrencyService, JwtVerifier, LanguageService, MailBridge,
    NotificationService, SettingService,
};
use setting_shared::MailConfig;

pub const SECRET: &[u8] = b"setting-service-integration-secret";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub gate: Arc<AuthorizationGate>,
    pub deny_list: MockDenyList,
    pub email: RecordingEmailPublisher,
    pub realtime: RecordingRealtimePublisher,
    pub notifications: Arc<MockNotificationRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_email_publisher(RecordingEmailPublisher::new())
    }

    pub fn with_email_publisher(email: RecordingEmailPublisher) -> Self {
        let currencies = Arc::new(MockCurrencyRepository::new());
        let notifications = Arc::new(MockNotificationRepository::new());
        let realtime = RecordingRealtimePublisher::new();
        let deny_list = MockDenyList::new();

        let mail = Arc::new(MailBridge::new(
            Arc::new(email.clone()),
            Arc::new(StaticTemplateRenderer),
            MailConfig {
                support_receivers: vec!["support@e-luxe.fr".to_string()],
                ..MailConfig::default()
            },
        ));

        let state = web::Data::new(AppState::new(
            Arc::new(CurrencyService::new(currencies.clone())),
            Arc::new(LanguageService::new(Arc::new(MockLanguageRepository::new()))),
            Arc::new(SettingService::new(
                Arc::new(MockSettingRepository::new()),
                currencies,
            )),
            Arc::new(NotificationService::new(
                notifications.clone(),
                Arc::new(realtime.clone()),
                mail,
            )),
        ));

        let gate = Arc::new(AuthorizationGate::new(
            Arc::new(deny_list.clone()),
            Arc::new(JwtVerifier::from_secret(SECRET, 0)),
        ));

        Self {
            state,
            gate,
            deny_list,
            email,
            realtime,
            notifications,
        }
    }
}

/// Token signed with [`SECRET`], valid for one hour
pub fn token() -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    encode(
        &Header::default(),
        &json!({ "sub": "admin-1", "exp": exp }),
        &EncodingKey::from_secret(SECRET),
    )
    .expect("token should encode")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
