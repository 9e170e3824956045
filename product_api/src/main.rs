// product_api/src/main.rs

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use product_api::db::{connect_pool, PgProductStore};
use product_api::web::{configure_app_routes, cors_headers};
use product_api::{AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting product API server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };

  let db_pool = connect_pool(&app_config)?;
  tracing::info!(
    max_connections = app_config.db_max_connections,
    "Database pool ready; connections open on first use."
  );

  let app_state = AppState::new(Arc::new(PgProductStore::new(db_pool)));

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(cors_headers())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  tracing::info!("Server stopped.");
  Ok(())
}
