//! Common type definitions

pub mod locale;
pub mod pagination;
pub mod response;

pub use locale::Locale;
pub use pagination::{Pagination, PaginatedResponse};
pub use response::{ApiResponse, ErrorBody, ResponseStatus};
