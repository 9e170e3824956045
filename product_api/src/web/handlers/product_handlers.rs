// product_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::Envelope;
use crate::state::AppState;
use crate::validation::{
  self, ProductForm, ValidationErrors, MISSING_DELETE_PRODUCT_ID, MISSING_PRODUCT_ID,
};

pub const INSERTED_MESSAGE: &str = "The product has been inserted successfully!";
pub const EDITED_MESSAGE: &str = "The product has been edited successfully!";
pub const DELETED_MESSAGE: &str = "The product has been deleted successfully!";

#[derive(Deserialize, Debug)]
pub struct ProductIdQuery {
  pub product_id: Option<String>,
}

// Input errors go back as a 200 with an error envelope.
fn rejected(errors: ValidationErrors) -> HttpResponse {
  warn!("Rejecting request: {}", errors);
  HttpResponse::Ok().json(Envelope::error(errors.message()))
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  info!("Getting products...");
  let products = app_state.store.list().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(Envelope::data(products)))
}

#[instrument(name = "handler::get_product", skip(app_state, query), fields(product_id = ?query.product_id))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductIdQuery>,
) -> Result<HttpResponse, AppError> {
  let product_id = match validation::validate_product_id(query.product_id.as_deref(), MISSING_PRODUCT_ID) {
    Ok(id) => id,
    Err(errors) => return Ok(rejected(errors)),
  };

  info!("Getting product with ID {}", product_id);
  let products = app_state.store.find_by_id(product_id).await?;
  if products.is_empty() {
    info!("No product with ID {}.", product_id);
  }
  Ok(HttpResponse::Ok().json(Envelope::data(products)))
}

#[instrument(name = "handler::create_product", skip(app_state, form))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  form: ProductForm,
) -> Result<HttpResponse, AppError> {
  let new_product = match validation::validate_new_product(&form) {
    Ok(product) => product,
    Err(errors) => return Ok(rejected(errors)),
  };

  info!("Inserting product '{}' into DB", new_product.product_name);
  let product_id = app_state.store.insert(&new_product, Utc::now()).await?;
  info!("Product inserted with ID {}.", product_id);

  Ok(HttpResponse::Ok().json(Envelope::success(INSERTED_MESSAGE)))
}

#[instrument(name = "handler::update_product", skip(app_state, form), fields(product_id = ?form.product_id))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  form: ProductForm,
) -> Result<HttpResponse, AppError> {
  let update = match validation::validate_product_update(&form) {
    Ok(update) => update,
    Err(errors) => return Ok(rejected(errors)),
  };

  info!("Updating product with ID {}", update.id);
  let rows = app_state.store.update(&update, Utc::now()).await?;
  if rows == 0 {
    // Reported as success all the same; clients cannot tell the difference.
    warn!("Update matched no product with ID {}.", update.id);
  }

  Ok(HttpResponse::Ok().json(Envelope::success(EDITED_MESSAGE)))
}

/// Serves both `DELETE /{product_id}` and a bare `DELETE /`, which has no id.
#[instrument(name = "handler::delete_product", skip(app_state, req), fields(product_id = ?req.match_info().get("product_id")))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
) -> Result<HttpResponse, AppError> {
  let raw_id = req.match_info().get("product_id");
  let product_id = match validation::validate_product_id(raw_id, MISSING_DELETE_PRODUCT_ID) {
    Ok(id) => id,
    Err(errors) => return Ok(rejected(errors)),
  };

  info!("Deleting product {} from DB", product_id);
  let rows = app_state.store.delete(product_id).await?;
  if rows == 0 {
    warn!("Delete matched no product with ID {}.", product_id);
  }

  Ok(HttpResponse::Ok().json(Envelope::success(DELETED_MESSAGE)))
}
