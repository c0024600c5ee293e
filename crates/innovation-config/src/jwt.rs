use std::env;

/// Tokens are valid for seven days after issuance.
pub const TOKEN_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;

const DEFAULT_SECRET: &str = "innovation-dev-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: TOKEN_EXPIRY_SECS,
        }
    }

    pub fn from_env() -> Self {
        let secret = env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| {
            tracing::warn!("ACCESS_TOKEN_SECRET is not set, using the development secret");
            DEFAULT_SECRET.to_string()
        });

        Self::new(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_seven_day_expiry() {
        let config = JwtConfig::new("secret");
        assert_eq!(config.token_expiry, 604_800);
        assert_eq!(config.secret, "secret");
    }
}
