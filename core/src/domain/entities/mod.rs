//! Domain entities representing core business objects.

pub mod claims;
pub mod currency;
pub mod dead_letter;
pub mod email_job;
pub mod language;
pub mod notification;
pub mod setting;

// Re-export commonly used types
pub use claims::Claims;
pub use currency::{Currency, CurrencyUpdate, NewCurrency};
pub use dead_letter::DeadLetter;
pub use email_job::EmailJob;
pub use language::{Language, LanguageUpdate, NewLanguage};
pub use notification::{NewNotification, Notification, NotificationPage, NotificationType};
pub use setting::{merge_json, Setting, SettingName};
