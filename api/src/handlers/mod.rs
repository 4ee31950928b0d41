//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod generate;
pub mod health;

pub use generate::generate;
pub use health::health;
