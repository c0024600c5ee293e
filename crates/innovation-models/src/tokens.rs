use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Payload to sign. Any JSON object is accepted; `email` is what the
/// per-user and admin checks read back.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct IssueTokenRequest(pub Map<String, Value>);

impl IssueTokenRequest {
    pub fn into_claims(self) -> Map<String, Value> {
        self.0
    }
}

// Every JSON object is a valid payload
impl Validate for IssueTokenRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_request_accepts_any_object() {
        let request: IssueTokenRequest =
            serde_json::from_value(json!({ "email": "a@x.com", "plan": "pro" })).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_claims().len(), 2);
    }

    #[test]
    fn test_issue_request_rejects_non_objects() {
        assert!(serde_json::from_value::<IssueTokenRequest>(json!(["a@x.com"])).is_err());
        assert!(serde_json::from_value::<IssueTokenRequest>(json!("a@x.com")).is_err());
    }

    #[test]
    fn test_issue_request_documents_as_object() {
        let schema = <IssueTokenRequest as utoipa::PartialSchema>::schema();
        let schema = serde_json::to_value(schema).unwrap();
        assert_eq!(schema["type"], "object");
    }
}
