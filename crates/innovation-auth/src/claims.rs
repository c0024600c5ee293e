//! Decoded token payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Claims embedded in a bearer token.
///
/// `email` identifies the caller for the per-user and admin checks. It is kept
/// as raw JSON so a signed payload with a non-string `email` still verifies;
/// such a caller simply has no identity. Any other caller-supplied claim is
/// preserved in `extra` and round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// `email` claim as issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: i64,
    /// Remaining caller-supplied claims
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Caller email, when the `email` claim is a string
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claims_deserialize_keeps_extra_fields() {
        let claims: Claims = serde_json::from_value(json!({
            "email": "a@x.com",
            "name": "Alice",
            "exp": 1_900_000_000,
            "iat": 1_899_395_200
        }))
        .unwrap();

        assert_eq!(claims.email(), Some("a@x.com"));
        assert_eq!(claims.extra.get("name"), Some(&json!("Alice")));
        assert!(!claims.extra.contains_key("email"));
    }

    #[test]
    fn test_claims_without_email() {
        let claims: Claims = serde_json::from_value(json!({
            "uid": 42,
            "exp": 1_900_000_000,
            "iat": 1_899_395_200
        }))
        .unwrap();

        assert_eq!(claims.email(), None);
        let serialized = serde_json::to_value(&claims).unwrap();
        assert!(serialized.get("email").is_none());
        assert_eq!(serialized["uid"], 42);
    }

    #[test]
    fn test_non_string_email_is_not_an_identity() {
        let claims: Claims = serde_json::from_value(json!({
            "email": 42,
            "exp": 1_900_000_000,
            "iat": 1_899_395_200
        }))
        .unwrap();

        assert_eq!(claims.email(), None);
        assert_eq!(serde_json::to_value(&claims).unwrap()["email"], 42);
    }
}
