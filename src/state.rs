use std::fmt;
use std::sync::Arc;

use innovation_config::{CorsConfig, JwtConfig};
use innovation_db::{
    InMemoryProductRepository, InMemoryUserRepository, PgProductRepository, PgUserRepository,
    ProductRepository, UserRepository, init_db_pool, run_migrations,
};

/// Shared handles passed to every handler and middleware through `State`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State backed by fresh in-memory repositories.
    pub fn in_memory(jwt_config: JwtConfig) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            products: Arc::new(InMemoryProductRepository::new()),
            jwt_config,
            cors_config: CorsConfig::default(),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects to PostgreSQL, applies pending migrations and loads configuration.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;

    Ok(AppState {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        products: Arc::new(PgProductRepository::new(pool)),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
