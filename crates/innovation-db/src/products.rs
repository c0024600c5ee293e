//! Product repository.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use innovation_models::{NewProduct, Product, ProductId};
use serde_json::{Map, Value};
use sqlx::{FromRow, PgPool, types::Json};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    id: String,
    id_kind: String,
    document: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = anyhow::Error;

    fn try_from(row: ProductRow) -> Result<Self> {
        let id = ProductId::from_parts(&row.id_kind, row.id.clone())
            .ok_or_else(|| anyhow!("Invalid product identifier '{}' ({})", row.id, row.id_kind))?;

        Ok(Self {
            id,
            fields: row.document.0,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product. Returns `None` when the identifier is already taken.
    async fn create_product(&self, product: NewProduct) -> Result<Option<Product>>;

    /// List all products in insertion order
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Get a product stored under a generated object identifier
    async fn find_by_object_id(&self, id: Uuid) -> Result<Option<Product>>;

    /// Get a product stored under a caller-supplied raw key
    async fn find_by_key(&self, key: &str) -> Result<Option<Product>>;
}

#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find(&self, id: &ProductId) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, id_kind, document, created_at
            FROM products
            WHERE id_kind = $1 AND id = $2
            "#,
        )
        .bind(id.kind())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch product")?;

        row.map(Product::try_from).transpose()
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id), name = "db_create_product")]
    async fn create_product(&self, product: NewProduct) -> Result<Option<Product>> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (id, id_kind, document, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id_kind, id) DO NOTHING
            "#,
        )
        .bind(product.id.to_string())
        .bind(product.id.kind())
        .bind(Json(&product.fields))
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert product")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Product::from(product)))
    }

    #[instrument(skip(self), name = "db_list_products")]
    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, id_kind, document, created_at FROM products ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch products")?;

        rows.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self), name = "db_find_product_by_object_id")]
    async fn find_by_object_id(&self, id: Uuid) -> Result<Option<Product>> {
        self.find(&ProductId::Object(id)).await
    }

    #[instrument(skip(self), name = "db_find_product_by_key")]
    async fn find_by_key(&self, key: &str) -> Result<Option<Product>> {
        self.find(&ProductId::Key(key.to_string())).await
    }
}
