use axum::{Router, routing::get};

use super::controller::{create_product, get_product, list_products};
use crate::state::AppState;

pub fn init_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
}
