//! Business services containing domain logic and use cases.

pub mod currency;
pub mod gate;
pub mod language;
pub mod mail_bridge;
pub mod messaging;
pub mod notification;
pub mod relay;
pub mod setting;

// Re-export commonly used types
pub use currency::CurrencyService;
pub use gate::{AuthorizationGate, DenyListLease, DenyListStore, JwtVerifier, TokenVerifier};
pub use language::LanguageService;
pub use mail_bridge::{ContactOptions, MailBridge};
pub use messaging::{
    DeadLetterSink, EmailJobPublisher, EmailTemplate, InboundDelivery, NoopRealtimePublisher,
    RealtimePublisher, TemplateRenderer,
};
pub use notification::NotificationService;
pub use relay::{NotificationRelay, RelayOutcome, RelayTopic};
pub use setting::SettingService;
