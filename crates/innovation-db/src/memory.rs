//! In-memory repositories.
//!
//! Same contracts as the PostgreSQL repositories, kept in process memory
//! behind a [`tokio::sync::RwLock`]. Writes take the write lock, so the
//! unique-email and unique-identifier checks are atomic with their inserts.

use anyhow::{Context, Result};
use async_trait::async_trait;
use innovation_models::{NewProduct, NewUser, Product, ProductId, User, UserFilterParams, UserRole};
use regex::{Regex, RegexBuilder};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::products::ProductRepository;
use crate::users::UserRepository;

fn case_insensitive(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid filter pattern '{}'", p))
        })
        .transpose()
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self, filter: &UserFilterParams) -> Result<Vec<User>> {
        let email = case_insensitive(filter.email.as_deref())?;
        let name = case_insensitive(filter.name.as_deref())?;
        let role = case_insensitive(filter.role.as_deref())?;

        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| email.as_ref().is_none_or(|re| re.is_match(&u.email)))
            .filter(|u| name.as_ref().is_none_or(|re| re.is_match(&u.name)))
            .filter(|u| {
                role.as_ref().is_none_or(|re| {
                    u.role.as_ref().is_some_and(|r| re.is_match(r.as_str()))
                })
            })
            .cloned()
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(None);
        }

        let user = User::from(user);
        users.push(user.clone());
        Ok(Some(user))
    }

    async fn update_role(&self, email: &str, role: &UserRole) -> Result<u64> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.role = Some(role.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok((before - users.len()) as u64)
    }

    async fn count_users(&self) -> Result<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find(&self, id: &ProductId) -> Option<Product> {
        let products = self.products.read().await;
        products.iter().find(|p| &p.id == id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create_product(&self, product: NewProduct) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Ok(None);
        }

        let product = Product::from(product);
        products.push(product.clone());
        Ok(Some(product))
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_object_id(&self, id: Uuid) -> Result<Option<Product>> {
        Ok(self.find(&ProductId::Object(id)).await)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Product>> {
        Ok(self.find(&ProductId::Key(key.to_string())).await)
    }
}
