//! Repository traits and their in-memory doubles.

pub mod currency;
pub mod language;
pub mod notification;
pub mod setting;

pub use currency::CurrencyRepository;
pub use language::LanguageRepository;
pub use notification::NotificationRepository;
pub use setting::SettingRepository;

#[cfg(any(test, feature = "mocks"))]
pub use currency::MockCurrencyRepository;
#[cfg(any(test, feature = "mocks"))]
pub use language::MockLanguageRepository;
#[cfg(any(test, feature = "mocks"))]
pub use notification::MockNotificationRepository;
#[cfg(any(test, feature = "mocks"))]
pub use setting::MockSettingRepository;
