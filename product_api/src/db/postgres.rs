// product_api/src/db/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::ProductStore;
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::{NewProduct, Product, ProductUpdate};

// The casts let `timestamp` and `timestamptz` columns both decode as `DateTime<Utc>`;
// sqlx sets the session time zone to UTC.
const SELECT_ALL: &str = "SELECT id, product_name, product_price, product_stock, \
   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at \
   FROM products ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, product_name, product_price, product_stock, \
   created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at \
   FROM products WHERE id = $1";
const INSERT: &str = "INSERT INTO products (product_name, product_price, product_stock, created_at, updated_at) \
   VALUES ($1, $2, $3, $4, $5) RETURNING id";
const UPDATE: &str = "UPDATE products SET product_name = $1, product_price = $2, product_stock = $3, updated_at = $4 \
   WHERE id = $5";
const DELETE: &str = "DELETE FROM products WHERE id = $1";

/// Builds the shared pool. Connections are opened on first use, so the
/// server starts even while the database is unreachable.
pub fn connect_pool(config: &AppConfig) -> Result<PgPool> {
  let options = config.database.connect_options()?;
  let pool = PgPoolOptions::new()
    .max_connections(config.db_max_connections)
    .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
    .connect_lazy_with(options);
  Ok(pool)
}

#[derive(Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

fn db_error(operation: &'static str) -> impl Fn(sqlx::Error) -> AppError {
  move |e| {
    error!(operation = operation, "Database error: {}", e);
    AppError::Sqlx(e)
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "product_store::list", skip(self), err)]
  async fn list(&self) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(SELECT_ALL)
      .fetch_all(&self.pool)
      .await
      .map_err(db_error("list"))?;
    debug!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "product_store::find_by_id", skip(self), err)]
  async fn find_by_id(&self, id: i32) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(SELECT_BY_ID)
      .bind(id)
      .fetch_all(&self.pool)
      .await
      .map_err(db_error("find_by_id"))?;
    Ok(products)
  }

  #[instrument(name = "product_store::insert", skip(self, product), fields(product_name = %product.product_name), err)]
  async fn insert(&self, product: &NewProduct, now: DateTime<Utc>) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(INSERT)
      .bind(&product.product_name)
      .bind(product.product_price)
      .bind(product.product_stock)
      .bind(now)
      .bind(now)
      .fetch_one(&self.pool)
      .await
      .map_err(db_error("insert"))?;
    Ok(id)
  }

  #[instrument(name = "product_store::update", skip(self, update), fields(product_id = update.id), err)]
  async fn update(&self, update: &ProductUpdate, now: DateTime<Utc>) -> Result<u64> {
    let result = sqlx::query(UPDATE)
      .bind(&update.product_name)
      .bind(update.product_price)
      .bind(update.product_stock)
      .bind(now)
      .bind(update.id)
      .execute(&self.pool)
      .await
      .map_err(db_error("update"))?;
    Ok(result.rows_affected())
  }

  #[instrument(name = "product_store::delete", skip(self), err)]
  async fn delete(&self, id: i32) -> Result<u64> {
    let result = sqlx::query(DELETE)
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(db_error("delete"))?;
    Ok(result.rows_affected())
  }

  #[instrument(name = "product_store::ping", skip(self), err)]
  async fn ping(&self) -> Result<()> {
    sqlx::query("SELECT 1")
      .execute(&self.pool)
      .await
      .map_err(db_error("ping"))?;
    Ok(())
  }
}
