//! User registration, lookup and role management.

pub mod controller;
pub mod router;
pub mod service;
