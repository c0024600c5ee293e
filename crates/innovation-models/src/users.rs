//! User data models and DTOs.
//!
//! - [`User`]: a stored user, keyed by a server-assigned object identifier
//! - [`UserRole`]: the stored role; only `"admin"` carries meaning
//! - [`CreateUserDto`] / [`NewUser`]: self-registration
//! - [`UpdateRoleDto`]: admin role assignment
//! - [`UserFilterParams`]: pattern filters for listing users
//! - [`RoleCheckResponse`]: `{ "<role>": bool }`

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::responses::{InsertResult, MessageResponse};

/// Role stored on a user.
///
/// Roles are open-ended strings. `Admin` is split out because it is the only
/// role the authorization gate understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Other(String),
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => Self::ADMIN,
            UserRole::Other(role) => role,
        }
    }
}

impl From<String> for UserRole {
    fn from(role: String) -> Self {
        if role == Self::ADMIN {
            UserRole::Admin
        } else {
            UserRole::Other(role)
        }
    }
}

impl From<&str> for UserRole {
    fn from(role: &str) -> Self {
        UserRole::from(role.to_string())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => UserRole::ADMIN.to_string(),
            UserRole::Other(role) => role,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(UserRole::Admin))
    }

    /// Exact, case-sensitive comparison against the stored role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_ref().is_some_and(|r| r.as_str() == role)
    }
}

/// Self-registration body. Roles cannot be chosen at registration.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// A user ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Option<UserRole>,
}

impl From<CreateUserDto> for NewUser {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: dto.email,
            name: dto.name,
            role: None,
        }
    }
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleDto {
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

/// Case-insensitive pattern filters for `GET /users`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterParams {
    /// Pattern matched against the email
    pub email: Option<String>,
    /// Pattern matched against the name
    pub name: Option<String>,
    /// Pattern matched against the role
    pub role: Option<String>,
}

impl UserFilterParams {
    /// Drops empty filters; an empty query value means "no filter".
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            email: keep(self.email),
            name: keep(self.name),
            role: keep(self.role),
        }
    }
}

/// `{ "<role>": true | false }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RoleCheckResponse(pub BTreeMap<String, bool>);

impl RoleCheckResponse {
    pub fn new(role: impl Into<String>, holds: bool) -> Self {
        Self(BTreeMap::from([(role.into(), holds)]))
    }
}

/// Registration outcome: the insert acknowledgement, or a notice that the
/// email was already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CreateUserResponse {
    Created(InsertResult),
    AlreadyExists(MessageResponse),
}

impl CreateUserResponse {
    pub fn already_exists() -> Self {
        CreateUserResponse::AlreadyExists(MessageResponse::new("user already exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_role_from_string() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(
            UserRole::from("instructor"),
            UserRole::Other("instructor".to_string())
        );
        // Role comparison is exact
        assert_eq!(UserRole::from("Admin"), UserRole::Other("Admin".to_string()));
    }

    #[test]
    fn test_user_serializes_with_document_id() {
        let user = User {
            id: Uuid::nil(),
            email: "a@x.com".to_string(),
            name: "Alice".to_string(),
            role: Some(UserRole::Admin),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["_id"], Uuid::nil().to_string());
        assert_eq!(value["role"], "admin");
    }

    #[test]
    fn test_user_without_role_omits_field() {
        let user: User = serde_json::from_value(json!({
            "_id": Uuid::nil(),
            "email": "b@x.com",
            "name": "Bob"
        }))
        .unwrap();

        assert!(!user.is_admin());
        assert!(!user.has_role("admin"));
        assert!(serde_json::to_value(&user).unwrap().get("role").is_none());
    }

    #[test]
    fn test_create_user_dto_validation() {
        let valid = CreateUserDto {
            email: "a@x.com".to_string(),
            name: "Alice".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUserDto {
            email: "not-an-email".to_string(),
            name: String::new(),
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_filter_params_normalized() {
        let params = UserFilterParams {
            email: Some(String::new()),
            name: Some("ali".to_string()),
            role: None,
        }
        .normalized();

        assert_eq!(params.email, None);
        assert_eq!(params.name.as_deref(), Some("ali"));
        assert_eq!(params.role, None);
    }

    #[test]
    fn test_role_check_response_shape() {
        let value = serde_json::to_value(RoleCheckResponse::new("admin", false)).unwrap();
        assert_eq!(value, json!({ "admin": false }));
    }

    #[test]
    fn test_create_user_response_already_exists() {
        let value = serde_json::to_value(CreateUserResponse::already_exists()).unwrap();
        assert_eq!(value, json!({ "message": "user already exists" }));
    }
}
