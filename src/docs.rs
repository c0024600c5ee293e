use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use innovation_core::ErrorResponse;
use innovation_models::{
    CreateProductDto, CreateUserDto, CreateUserResponse, DeleteResult, InsertResult,
    IssueTokenRequest, MessageResponse, Product, RoleCheckResponse, TokenResponse, UpdateRoleDto,
    User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::check_role,
        crate::modules::users::controller::update_role,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::delete_user,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::list_products,
        crate::modules::products::controller::get_product,
    ),
    components(
        schemas(
            IssueTokenRequest,
            TokenResponse,
            User,
            CreateUserDto,
            CreateUserResponse,
            UpdateRoleDto,
            RoleCheckResponse,
            Product,
            CreateProductDto,
            InsertResult,
            DeleteResult,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Bearer token issuing"),
        (name = "Users", description = "User registration and role management"),
        (name = "Products", description = "Product catalogue")
    ),
    info(
        title = "Innovation API",
        version = "0.1.0",
        description = "Users and products over HTTP with bearer-token authentication and an admin role gate.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
