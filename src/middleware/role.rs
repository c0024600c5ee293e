//! Admin gate.
//!
//! Roles live in persistence, not in tokens, so every gated request looks the
//! caller up again. Must run after [`require_auth`](super::auth::require_auth).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use innovation_core::AppError;
use innovation_models::User;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Ok only for a stored user holding the admin role.
pub fn check_admin(user: Option<&User>) -> Result<(), AppError> {
    match user {
        Some(user) if user.is_admin() => Ok(()),
        _ => Err(AppError::forbidden()),
    }
}

/// Rejects callers whose stored role is not "admin" with 403.
///
/// Responds 401 when no authenticated claims are present, 403 when the claims
/// carry no email or no user is stored under it.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = req
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(AppError::unauthorized)?;

    let Some(email) = auth_user.email() else {
        warn!("Admin check on a token without email");
        return Err(AppError::forbidden());
    };

    let user = state
        .users
        .find_by_email(email)
        .await
        .map_err(AppError::database)?;

    check_admin(user.as_ref()).inspect_err(|_| {
        warn!(email = %email, "Admin access denied");
    })?;

    Ok(next.run(req).await)
}
