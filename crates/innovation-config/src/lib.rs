//! # Innovation Config
//!
//! Configuration types for the Innovation API, each loaded from environment
//! variables through a `from_env` constructor:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed CORS origins
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use innovation_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::{JwtConfig, TOKEN_EXPIRY_SECS};
pub use server::ServerConfig;
