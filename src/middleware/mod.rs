//! Authentication and authorization middleware.
//!
//! - [`auth`]: bearer token verification (`require_auth`) and the
//!   [`auth::AuthUser`] extractor
//! - [`role`]: the admin gate (`require_admin`)
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `require_auth` verifies the token and stores the claims in the request
//!    extensions, or rejects with 401
//! 3. `require_admin`, where applied, looks up the caller's stored role and
//!    rejects non-admins with 403
//! 4. The handler reads the claims through `AuthUser`
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::patch};
//!
//! let route = patch(update_role)
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;
pub mod role;
