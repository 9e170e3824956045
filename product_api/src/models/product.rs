// product_api/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub product_name: String,
  pub product_price: i32,
  pub product_stock: i32,
  pub created_at: DateTime<Utc>,
  // Existing clients read this key as `update_at`.
  #[serde(rename = "update_at")]
  pub updated_at: DateTime<Utc>,
}

/// A validated create request, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
  pub product_name: String,
  pub product_price: i32,
  pub product_stock: i32,
}

/// A validated update request. `created_at` is never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
  pub id: i32,
  pub product_name: String,
  pub product_price: i32,
  pub product_stock: i32,
}
