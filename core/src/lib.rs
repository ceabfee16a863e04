//! # Setting Core
//!
//! Domain layer of the setting service: entities, repository interfaces,
//! business services and error types. Transport and storage adapters live in
//! `setting_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Claims, Currency, CurrencyUpdate, DeadLetter, EmailJob, Language, LanguageUpdate,
    NewCurrency, NewLanguage, NewNotification, Notification, NotificationPage, NotificationType,
    Setting, SettingName,
};
pub use domain::value_objects::{MessageEnvelope, ReadStatus, Visibility};
pub use errors::{DomainError, DomainResult, Resource, TokenError, ValidationError};
pub use repositories::{
    CurrencyRepository, LanguageRepository, NotificationRepository, SettingRepository,
};
pub use services::{
    AuthorizationGate, ContactOptions, CurrencyService, LanguageService, MailBridge,
    NotificationRelay, NotificationService, RelayOutcome, RelayTopic, SettingService,
};
