// product_api/src/web/handlers/health_handlers.rs

use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

/// Reports `ok` only when the database answers.
#[instrument(name = "handler::health", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.store.ping().await?;
  Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

fn describe(req: &HttpRequest) -> String {
  format!("{} {}", req.method(), req.path())
}

/// Default for a known path: preflight gets 204, any other method 405.
pub async fn method_not_allowed_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  if req.method() == Method::OPTIONS {
    return Ok(HttpResponse::NoContent().finish());
  }
  Err(AppError::MethodNotAllowed(describe(&req)))
}

/// Default for unknown paths.
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  if req.method() == Method::OPTIONS {
    return Ok(HttpResponse::NoContent().finish());
  }
  Err(AppError::NotFound(describe(&req)))
}
