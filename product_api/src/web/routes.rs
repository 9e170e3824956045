// product_api/src/web/routes.rs

use actix_web::{error::QueryPayloadError, guard, http::header, middleware::DefaultHeaders, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, product_handlers};

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest(format!("Could not read query string: {}", err)).into()
}

/// Headers every response carries: JSON content type and allow-all CORS.
pub fn cors_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add((header::CONTENT_TYPE, "application/json"))
    .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
    .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"))
    .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "*"))
}

// This function will be called in `main.rs` to configure services for the Actix App.
//
// `/health` and `/product` only claim GET; any other method on them falls
// through to `/{product_id}`, so `DELETE /product` is an id error, not a 405.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .service(
      web::resource("/health")
        .guard(guard::Get())
        .route(web::get().to(health_handlers::health_check_handler)),
    )
    .service(
      web::resource("/")
        .route(web::get().to(product_handlers::list_products_handler))
        .route(web::post().to(product_handlers::create_product_handler))
        .route(web::put().to(product_handlers::update_product_handler))
        .route(web::delete().to(product_handlers::delete_product_handler))
        .default_service(web::to(health_handlers::method_not_allowed_handler)),
    )
    .service(
      web::resource("/product")
        .guard(guard::Get())
        .route(web::get().to(product_handlers::get_product_handler)),
    )
    .service(
      web::resource("/{product_id}")
        .route(web::delete().to(product_handlers::delete_product_handler))
        .default_service(web::to(health_handlers::method_not_allowed_handler)),
    )
    .default_service(web::to(health_handlers::not_found_handler));
}
