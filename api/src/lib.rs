//! HTTP surface of the setting service
//!
//! Exposed as a library so integration tests can build the application
//! around in-memory repositories.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
pub use config::HttpConfig;
