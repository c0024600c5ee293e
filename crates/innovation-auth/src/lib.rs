//! # Innovation Auth
//!
//! The token service of the Innovation API.
//!
//! - [`claims`]: the decoded payload carried by a bearer token
//! - [`jwt`]: issuing and verifying HS256-signed tokens
//! - [`error`]: why a token was rejected
//!
//! Tokens carry whatever claims the caller asked for, plus `iat` and an `exp`
//! seven days after issuance. There is no revocation list; expiry is the only
//! way a token stops being valid.
//!
//! # Example
//!
//! ```ignore
//! use innovation_auth::{issue_token, verify_token};
//! use innovation_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let mut payload = serde_json::Map::new();
//! payload.insert("email".into(), "a@x.com".into());
//!
//! let token = issue_token(payload, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email(), Some("a@x.com"));
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

pub use claims::Claims;
pub use error::TokenError;
pub use jwt::{issue_token, verify_token};
