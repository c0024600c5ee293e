use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use innovation_auth::{Claims, verify_token};
use innovation_config::JwtConfig;
use innovation_core::AppError;
use innovation_observability::track_auth_failure;

use crate::state::AppState;

/// Claims of the authenticated caller.
///
/// Inserted into the request extensions by [`require_auth`]. Used as an
/// extractor it reads those extensions, and verifies the `Authorization`
/// header itself when the middleware did not run.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The caller's email, when the token carries one
    pub fn email(&self) -> Option<&str> {
        self.0.email()
    }
}

/// Second whitespace-separated word of the header value.
fn bearer_token(value: &str) -> Option<&str> {
    value.split_whitespace().nth(1)
}

/// Verifies the bearer token in `headers`.
///
/// A header without a second word is treated as an invalid token. Failure
/// kinds are logged and counted, never returned to the caller.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        warn!("Missing authorization header");
        track_auth_failure("missing_header");
        return Err(AppError::unauthorized());
    };

    let token = value.to_str().ok().and_then(bearer_token).unwrap_or_default();

    verify_token(token, jwt_config).map_err(|err| {
        warn!(reason = err.reason(), "Token verification failed");
        track_auth_failure(err.reason());
        AppError::unauthorized()
    })
}

/// Rejects requests without a valid bearer token; otherwise stores the
/// decoded claims as [`AuthUser`] and continues.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config).map(AuthUser)
    }
}
