//! Request handling helpers shared by the routes

pub mod error;

pub use error::{bad_request, handle_domain_error_with_lang};
