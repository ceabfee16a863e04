//! Notification use cases

mod service;


pub use service::NotificationService;
