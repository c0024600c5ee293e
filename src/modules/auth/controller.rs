use axum::{Json, extract::State};
use tracing::instrument;

use innovation_core::{AppError, ErrorResponse};
use innovation_models::{IssueTokenRequest, TokenResponse};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue a bearer token for an arbitrary payload
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IssueTokenRequest,
    responses(
        (status = 200, description = "Signed token, valid for 7 days", body = TokenResponse),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, request))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::issue_token(request, &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
