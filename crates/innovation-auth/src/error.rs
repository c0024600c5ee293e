use thiserror::Error;

/// Reasons a bearer token fails verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidToken,
    #[error("token has expired")]
    ExpiredToken,
    #[error("token is malformed")]
    MalformedToken,
}

impl TokenError {
    /// Short label used in logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::InvalidToken => "invalid",
            TokenError::ExpiredToken => "expired",
            TokenError::MalformedToken => "malformed",
        }
    }
}
