//! Token issuing.

pub mod controller;
pub mod router;
pub mod service;
