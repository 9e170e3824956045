// product_api/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Method Not Allowed: {0}")]
  MethodNotAllowed(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
      AppError::Config(_) | AppError::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let message = match self {
      AppError::BadRequest(m) => m.clone(),
      AppError::NotFound(m) => format!("No route for {}", m),
      AppError::MethodNotAllowed(m) => format!("Method not allowed for {}", m),
      AppError::Config(_) => "Configuration issue".to_string(),
      AppError::Sqlx(_) => "Database operation failed".to_string(),
    };

    // Server-side failures keep their detail in the log only.
    if self.status_code().is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }

    HttpResponse::build(self.status_code()).json(Envelope::error(message))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
