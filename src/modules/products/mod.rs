//! Products: open documents with a generated or caller-chosen identifier.

pub mod controller;
pub mod router;
pub mod service;
