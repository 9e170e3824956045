// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc, Mutex,
};
use tracing::Level;

use product_api::db::ProductStore;
use product_api::models::{NewProduct, Product, ProductUpdate};
use product_api::{AppError, AppState, Result};

// --- In-memory stand-in for the products table ---
#[derive(Default)]
pub struct MemoryProductStore {
  rows: Mutex<Vec<Product>>,
  next_id: Mutex<i32>,
  fail_next: AtomicBool,
}

impl MemoryProductStore {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn len(&self) -> usize {
    self.rows.lock().unwrap().len()
  }

  pub fn rows(&self) -> Vec<Product> {
    self.rows.lock().unwrap().clone()
  }

  /// The next store call fails the way a lost connection would.
  pub fn fail_next_call(&self) {
    self.fail_next.store(true, Ordering::SeqCst);
  }

  fn check_failure(&self) -> Result<()> {
    if self.fail_next.swap(false, Ordering::SeqCst) {
      return Err(AppError::Sqlx(sqlx::Error::PoolTimedOut));
    }
    Ok(())
  }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
  async fn list(&self) -> Result<Vec<Product>> {
    self.check_failure()?;
    Ok(self.rows())
  }

  async fn find_by_id(&self, id: i32) -> Result<Vec<Product>> {
    self.check_failure()?;
    Ok(self.rows().into_iter().filter(|p| p.id == id).collect())
  }

  async fn insert(&self, product: &NewProduct, now: DateTime<Utc>) -> Result<i32> {
    self.check_failure()?;
    let id = {
      let mut next_id = self.next_id.lock().unwrap();
      *next_id += 1;
      *next_id
    };
    self.rows.lock().unwrap().push(Product {
      id,
      product_name: product.product_name.clone(),
      product_price: product.product_price,
      product_stock: product.product_stock,
      created_at: now,
      updated_at: now,
    });
    Ok(id)
  }

  async fn update(&self, update: &ProductUpdate, now: DateTime<Utc>) -> Result<u64> {
    self.check_failure()?;
    let mut rows = self.rows.lock().unwrap();
    let mut affected = 0;
    for row in rows.iter_mut().filter(|p| p.id == update.id) {
      row.product_name = update.product_name.clone();
      row.product_price = update.product_price;
      row.product_stock = update.product_stock;
      row.updated_at = now;
      affected += 1;
    }
    Ok(affected)
  }

  async fn delete(&self, id: i32) -> Result<u64> {
    self.check_failure()?;
    let mut rows = self.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|p| p.id != id);
    Ok((before - rows.len()) as u64)
  }

  async fn ping(&self) -> Result<()> {
    self.check_failure()
  }
}

pub fn app_state(store: Arc<MemoryProductStore>) -> AppState {
  AppState::new(store)
}

/// Builds the real app around the given store and returns the test service.
macro_rules! init_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($crate::common::app_state($store.clone())))
        .wrap(product_api::web::cors_headers())
        .configure(product_api::web::configure_app_routes),
    )
    .await
  };
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
