// product_api/src/web/mod.rs

// Declare child modules
pub mod form;
pub mod handlers;
pub mod routes;

pub use routes::{configure_app_routes, cors_headers};
