pub mod auth;
pub mod cors;
pub mod locale;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
pub use locale::{LocaleResolver, RequestLocale};
