use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use innovation_core::{AppError, ErrorResponse};
use innovation_models::{
    CreateUserDto, CreateUserResponse, DeleteResult, MessageResponse, RoleCheckResponse,
    UpdateRoleDto, User, UserFilterParams,
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List users, optionally filtered
///
/// Each filter is a case-insensitive regular expression matched anywhere in
/// the field.
#[utoipa::path(
    get,
    path = "/users",
    params(UserFilterParams),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilterParams>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_users(state.users.as_ref(), filter).await?;
    Ok(Json(users))
}

/// Check whether the caller holds a role
#[utoipa::path(
    get,
    path = "/users/{role}/{email}",
    params(
        ("role" = String, Path, description = "Role to check"),
        ("email" = String, Path, description = "Caller email; any other email answers false")
    ),
    responses(
        (status = 200, description = "`{ \"<role>\": bool }`", body = RoleCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn check_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((role, email)): Path<(String, String)>,
) -> Result<Json<RoleCheckResponse>, AppError> {
    let response =
        UserService::check_role(state.users.as_ref(), auth_user.email(), &role, &email).await?;
    Ok(Json(response))
}

/// Set a user's role (admin only)
#[utoipa::path(
    patch,
    path = "/users/{email}",
    params(
        ("email" = String, Path, description = "Email of the user to update")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 422, description = "Invalid role", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn update_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = UserService::update_role(state.users.as_ref(), &email, dto).await?;
    Ok(Json(response))
}

/// Register a user
///
/// Registering an email that already exists changes nothing and answers
/// `{ "message": "user already exists" }`.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created, or already registered", body = CreateUserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Invalid email or name", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let response = UserService::create_user(state.users.as_ref(), dto).await?;
    Ok(Json(response))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResult),
        (status = 400, description = "Not a valid user id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let response = UserService::delete_user(state.users.as_ref(), &id).await?;
    Ok(Json(response))
}
