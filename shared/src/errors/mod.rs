//! Platform error numbers
//!
//! Every service of the platform reports failures with the same `errNo`
//! values so that front-ends can branch on them regardless of locale.

pub mod error_numbers {
    pub const VALIDATOR: u32 = 6;
    pub const BAD_LOGIN_CREDENTIALS: u32 = 7;
    pub const INVALID_TOKEN: u32 = 11;
    pub const EXPIRED_TOKEN: u32 = 12;
    pub const BLACKLISTED_TOKEN: u32 = 13;
    pub const TOKEN_NOT_FOUND: u32 = 14;
    pub const REQUIRED_PERMISSION: u32 = 15;
    pub const RESOURCE_EXIST: u32 = 25;
    pub const RESOURCE_NOT_FOUND: u32 = 26;
    pub const INVALID_RESOURCE: u32 = 27;
    pub const NOT_ALLOWED_METHOD: u32 = 31;
    pub const GENERIC_ERROR: u32 = 259;
    pub const RESOURCE_ALREADY_EXISTS: u32 = 260;
}
