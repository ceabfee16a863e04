//! Decoded bearer token claims

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims issued by the user service.
///
/// Only `exp` is required, every other claim is kept in `extra` so that
/// handlers see the full decoded token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Subject identity, falling back to the `_id` or `id` claims
    pub fn subject(&self) -> Option<String> {
        if let Some(sub) = &self.sub {
            return Some(sub.clone());
        }
        ["_id", "id"].iter().find_map(|key| match self.extra.get(*key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subject_prefers_sub() {
        let claims: Claims =
            serde_json::from_value(json!({ "sub": "u-1", "_id": "u-2", "exp": 10 })).unwrap();
        assert_eq!(claims.subject().as_deref(), Some("u-1"));
    }

    #[test]
    fn test_subject_falls_back_to_id_claim() {
        let claims: Claims =
            serde_json::from_value(json!({ "_id": "abc", "exp": 10, "role": "admin" })).unwrap();

        assert_eq!(claims.subject().as_deref(), Some("abc"));
        assert_eq!(claims.extra["role"], "admin");
    }
}
