//! # Innovation Models
//!
//! Domain models and request/response DTOs for the Innovation API.
//!
//! - [`users`]: users, roles and user DTOs
//! - [`products`]: products and their two identifier kinds
//! - [`tokens`]: token issuing request/response
//! - [`responses`]: write acknowledgements shared by both resources
//!
//! Field names on the wire follow the document-store conventions the API
//! has always used (`_id`, `createdAt`, `insertedId`, `deletedCount`).

pub mod products;
pub mod responses;
pub mod tokens;
pub mod users;

pub use products::{CreateProductDto, NewProduct, Product, ProductId};
pub use responses::{DeleteResult, InsertResult, MessageResponse};
pub use tokens::{IssueTokenRequest, TokenResponse};
pub use users::{
    CreateUserDto, CreateUserResponse, NewUser, RoleCheckResponse, UpdateRoleDto, User,
    UserFilterParams, UserRole,
};
