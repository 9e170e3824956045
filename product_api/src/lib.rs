// product_api/src/lib.rs

//! JSON-over-HTTP CRUD service for the `products` table.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod validation;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
