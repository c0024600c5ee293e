//! Fake data seeding.
//!
//! Generates users and products with the `fake` crate and inserts them
//! through the repositories. Generated emails carry a numeric suffix so one
//! run never collides with itself; collisions with earlier runs are skipped.

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName};
use innovation_db::{ProductRepository, UserRepository};
use innovation_models::{CreateProductDto, CreateUserDto, NewProduct, NewUser};
use serde_json::{Map, Value, json};

/// How much data to seed.
#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub users: usize,
    pub products: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 20,
            products: 50,
        }
    }
}

/// Counts of records actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub products: usize,
}

pub fn generate_users(count: usize) -> Vec<NewUser> {
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}+{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );

            NewUser::from(CreateUserDto {
                email,
                name: format!("{} {}", first_name, last_name),
            })
        })
        .collect()
}

pub fn generate_products(count: usize) -> Vec<NewProduct> {
    (0..count)
        .map(|_| {
            let words: Vec<String> = Words(1..4).fake();
            let description: String = Sentence(4..10).fake();
            let category: String = Word().fake();
            let price: f64 = (1.0..500.0).fake();

            let mut fields = Map::new();
            fields.insert("title".to_string(), Value::String(words.join(" ")));
            fields.insert("description".to_string(), Value::String(description));
            fields.insert("category".to_string(), Value::String(category));
            fields.insert("price".to_string(), json!((price * 100.0).round() / 100.0));

            NewProduct::from_dto(CreateProductDto { id: None, fields }, Utc::now())
        })
        .collect()
}

pub async fn seed_users(users: &dyn UserRepository, count: usize) -> Result<usize> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let mut inserted = 0;
    for user in generate_users(count) {
        if users.create_user(user).await?.is_some() {
            inserted += 1;
        }
    }

    println!(
        "✅ Inserted {} users in {:.2?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}

pub async fn seed_products(products: &dyn ProductRepository, count: usize) -> Result<usize> {
    let start_time = Instant::now();
    println!("📦 Seeding {} products...", count);

    let mut inserted = 0;
    for product in generate_products(count) {
        if products.create_product(product).await?.is_some() {
            inserted += 1;
        }
    }

    println!(
        "✅ Inserted {} products in {:.2?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}

pub async fn seed_all(
    users: &dyn UserRepository,
    products: &dyn ProductRepository,
    config: SeedConfig,
) -> Result<SeedSummary> {
    Ok(SeedSummary {
        users: seed_users(users, config.users).await?,
        products: seed_products(products, config.products).await?,
    })
}
