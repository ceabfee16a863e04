//! Identifier validation utilities

/// Column width of ids owned by other services (orders, products, users)
pub const FOREIGN_ID_MAX_LEN: usize = 64;

/// Check whether an id issued by another service fits its column.
///
/// The content itself is opaque, every numbering scheme is accepted.
pub fn fits_foreign_id(value: &str) -> bool {
    value.chars().count() <= FOREIGN_ID_MAX_LEN
}

/// Split a comma separated id list from a path segment
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
