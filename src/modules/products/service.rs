use anyhow::anyhow;
use chrono::Utc;
use innovation_core::AppError;
use innovation_db::ProductRepository;
use innovation_models::{CreateProductDto, InsertResult, NewProduct, Product};
use innovation_observability::track_product_created;
use uuid::Uuid;

pub struct ProductService;

impl ProductService {
    /// Stores the product stamped with the server clock. A body `_id` is used
    /// as a raw key; otherwise an object identifier is generated.
    pub async fn create_product(
        products: &dyn ProductRepository,
        dto: CreateProductDto,
    ) -> Result<InsertResult, AppError> {
        let product = NewProduct::from_dto(dto, Utc::now());
        let id = product.id.clone();

        products
            .create_product(product)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| {
                AppError::conflict(anyhow!("Product with _id '{}' already exists", id))
            })?;

        track_product_created(id.kind());
        Ok(InsertResult::new(&id))
    }

    pub async fn list_products(products: &dyn ProductRepository) -> Result<Vec<Product>, AppError> {
        products.list_products().await.map_err(AppError::database)
    }

    /// Looks `id` up as an object identifier first (when it parses as one),
    /// then as a raw key.
    pub async fn get_product(
        products: &dyn ProductRepository,
        id: &str,
    ) -> Result<Product, AppError> {
        if let Ok(object_id) = Uuid::parse_str(id) {
            if let Some(product) = products
                .find_by_object_id(object_id)
                .await
                .map_err(AppError::database)?
            {
                return Ok(product);
            }
        }

        products
            .find_by_key(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("Product not found")))
    }
}
