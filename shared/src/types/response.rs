//! Uniform response envelope
//!
//! Success: `{"status": "OK", "data": ...}`
//! Failure: `{"status": "FAILED", "data": {"errNo": 26, "errMsg": "..."}}`

use serde::{Deserialize, Serialize};

/// Envelope status marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data,
        }
    }
}

/// Error payload of a failed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Platform error number, see [`crate::error_numbers`]
    #[serde(rename = "errNo")]
    pub err_no: u32,

    /// Localized message, or a `{field: [messages]}` object for validation failures
    #[serde(rename = "errMsg")]
    pub err_msg: serde_json::Value,
}

impl ApiResponse<ErrorBody> {
    /// Create a failed response with a plain message
    pub fn failed(err_no: u32, message: impl Into<String>) -> Self {
        Self::failed_with(err_no, serde_json::Value::String(message.into()))
    }

    /// Create a failed response with a structured message
    pub fn failed_with(err_no: u32, err_msg: serde_json::Value) -> Self {
        Self {
            status: ResponseStatus::Failed,
            data: ErrorBody { err_no, err_msg },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::ok(json!({"name": "Euro"}));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "OK", "data": {"name": "Euro"}})
        );
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = ApiResponse::failed(26, "Currency not found");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "FAILED", "data": {"errNo": 26, "errMsg": "Currency not found"}})
        );
    }
}
