use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use innovation_core::{AppError, ErrorResponse};
use innovation_models::{CreateProductDto, InsertResult, Product};

use crate::modules::products::service::ProductService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a product
///
/// Any JSON object is stored as-is. `createdAt` is always set by the server.
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductDto,
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertResult),
        (status = 400, description = "Body is not a JSON object, or `_id` is not a string", body = ErrorResponse),
        (status = 409, description = "`_id` already in use", body = ErrorResponse),
        (status = 422, description = "Empty `_id`", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state, dto))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<Json<InsertResult>, AppError> {
    let response = ProductService::create_product(state.products.as_ref(), dto).await?;
    Ok(Json(response))
}

/// List all products in insertion order
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductService::list_products(state.products.as_ref()).await?;
    Ok(Json(products))
}

/// Get a product by object id or raw key
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Object id or raw key")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::get_product(state.products.as_ref(), &id).await?;
    Ok(Json(product))
}
