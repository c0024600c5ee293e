//! # Innovation DB
//!
//! Persistence layer for the Innovation API.
//!
//! Handlers never talk to a database directly. They hold
//! `Arc<dyn UserRepository>` and `Arc<dyn ProductRepository>` handles, which
//! are backed by either:
//!
//! - [`users::PgUserRepository`] / [`products::PgProductRepository`]: PostgreSQL via SQLx
//! - [`memory::InMemoryUserRepository`] / [`memory::InMemoryProductRepository`]:
//!   process-local storage for tests and local development
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required by [`init_db_pool`])
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use innovation_db::{init_db_pool, PgUserRepository, UserRepository};
//!
//! let pool = init_db_pool().await?;
//! innovation_db::run_migrations(&pool).await?;
//! let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));
//! ```

use std::env;

use anyhow::Context;
use sqlx::migrate::Migrator;

pub mod memory;
pub mod products;
pub mod users;

pub use memory::{InMemoryProductRepository, InMemoryUserRepository};
pub use products::{PgProductRepository, ProductRepository};
pub use users::{PgUserRepository, UserRepository};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Embedded SQL migrations from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects to the PostgreSQL database named by `DATABASE_URL`.
///
/// The returned pool is cheaply cloneable and should be shared by every
/// repository.
pub async fn init_db_pool() -> anyhow::Result<PgPool> {
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")
}
