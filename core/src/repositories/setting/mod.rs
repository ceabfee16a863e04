pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
#[cfg(any(test, feature = "mocks"))]
pub mod mock;

pub use r#trait::SettingRepository;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockSettingRepository;
