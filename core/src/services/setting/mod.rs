//! Store setting documents

mod service;


pub use service::SettingService;
