//! # Innovation Core
//!
//! Foundational types shared by every crate of the Innovation API.
//!
//! - [`errors`]: the [`AppError`] type and its HTTP response mapping
//!
//! # Example
//!
//! ```ignore
//! use innovation_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Product not found"));
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse, FORBIDDEN_MESSAGE, UNAUTHORIZED_MESSAGE};
