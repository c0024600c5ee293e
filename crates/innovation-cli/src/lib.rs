//! # Innovation CLI
//!
//! Administrative utilities for the Innovation API: bootstrapping the first
//! admin and seeding development data.
//!
//! Everything here works through the repository traits of `innovation-db`,
//! so the same code runs against PostgreSQL or the in-memory repositories.
//!
//! ## Usage
//!
//! ```ignore
//! use innovation_cli::seeder::{seed_all, SeedConfig};
//!
//! seed_all(&users, &products, SeedConfig { users: 20, products: 50 }).await?;
//! ```

pub mod admin;
pub mod seeder;
