use innovation_auth::issue_token;
use innovation_config::JwtConfig;
use innovation_core::AppError;
use innovation_models::IssueTokenRequest;
use innovation_observability::track_token_issued;

pub struct AuthService;

impl AuthService {
    /// Signs the caller's payload as a seven-day bearer token.
    pub fn issue_token(
        request: IssueTokenRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let token = issue_token(request.into_claims(), jwt_config)?;
        track_token_issued();
        Ok(token)
    }
}
