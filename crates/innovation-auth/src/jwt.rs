//! Issuing and verifying bearer tokens.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Issuing signs the
//! caller's payload as-is after stamping `iat` and `exp`; verifying checks the
//! signature and expiry (with the library's default 60 second leeway) and
//! returns the decoded [`Claims`].

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde_json::{Map, Value};

use innovation_config::JwtConfig;
use innovation_core::AppError;

use crate::claims::Claims;
use crate::error::TokenError;

/// Signs `payload` with a `token_expiry` lifetime.
///
/// Any `exp` or `iat` supplied by the caller is replaced.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn issue_token(
    mut payload: Map<String, Value>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    payload.insert("iat".to_string(), Value::from(now));
    payload.insert("exp".to_string(), Value::from(now + jwt_config.token_expiry));

    encode(
        &Header::default(),
        &payload,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies `token` and returns its claims.
///
/// # Errors
///
/// - [`TokenError::ExpiredToken`] once `exp` has elapsed
/// - [`TokenError::MalformedToken`] when the input is not a well-formed signed token
/// - [`TokenError::InvalidToken`] for a bad signature or unexpected algorithm
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Claims are caller-chosen, so an `aud` claim must not cause a rejection.
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::MissingRequiredClaim(_) => TokenError::MalformedToken,
        _ => TokenError::InvalidToken,
    })
}
