// product_api/src/db/mod.rs

//! Storage access for the products table.

pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::models::{NewProduct, Product, ProductUpdate};

pub use postgres::{connect_pool, PgProductStore};

/// One method per statement the API runs. Implementations must not wrap
/// calls in transactions; each call stands alone.
#[async_trait]
pub trait ProductStore: Send + Sync {
  async fn list(&self) -> Result<Vec<Product>>;

  /// Rows matching `id`. Empty when nothing matches.
  async fn find_by_id(&self, id: i32) -> Result<Vec<Product>>;

  /// Inserts with `created_at` and `updated_at` both set to `now`. Returns the new id.
  async fn insert(&self, product: &NewProduct, now: DateTime<Utc>) -> Result<i32>;

  /// Overwrites name, price, stock and `updated_at`. Returns rows affected.
  async fn update(&self, update: &ProductUpdate, now: DateTime<Utc>) -> Result<u64>;

  /// Returns rows affected.
  async fn delete(&self, id: i32) -> Result<u64>;

  async fn ping(&self) -> Result<()>;
}
