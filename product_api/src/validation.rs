// product_api/src/validation.rs

//! Turns untyped form and query strings into validated product requests.
//!
//! Every check runs, in field order, and the caller gets either the typed value
//! or the full list of field errors. Responses report the first error only.

use serde::Deserialize;
use std::fmt;

use crate::models::{NewProduct, ProductUpdate};

pub const MISSING_PRODUCT_NAME: &str = "You are missing product_name parameter.";
pub const MISSING_PRODUCT_ID: &str = "You are missing product_id parameter.";
// Existing clients match on this exact text, typo included.
pub const MISSING_DELETE_PRODUCT_ID: &str = "You are missing product)id parameter.";

/// Raw fields of a form-encoded product body. Absent fields read as empty.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductForm {
  #[serde(default)]
  pub product_id: Option<String>,
  #[serde(default)]
  pub product_name: Option<String>,
  #[serde(default)]
  pub product_price: Option<String>,
  #[serde(default)]
  pub product_stock: Option<String>,
}

impl ProductForm {
  fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
  }

  /// Records a named field. The first value seen for a name is kept; unknown names are ignored.
  pub fn set_if_absent(&mut self, name: &str, value: String) {
    let slot = match name {
      "product_id" => &mut self.product_id,
      "product_name" => &mut self.product_name,
      "product_price" => &mut self.product_price,
      "product_stock" => &mut self.product_stock,
      _ => return,
    };
    if slot.is_none() {
      *slot = Some(value);
    }
  }

  /// Fields from `self`, falling back to `other` where `self` has none.
  pub fn merged_over(self, other: ProductForm) -> ProductForm {
    ProductForm {
      product_id: self.product_id.or(other.product_id),
      product_name: self.product_name.or(other.product_name),
      product_price: self.product_price.or(other.product_price),
      product_stock: self.product_stock.or(other.product_stock),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
  pub field: &'static str,
  pub message: String,
}

impl FieldError {
  fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self {
      field,
      message: message.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
  errors: Vec<FieldError>,
}

impl ValidationErrors {
  pub fn errors(&self) -> &[FieldError] {
    &self.errors
  }

  /// The message reported to the client.
  pub fn message(&self) -> &str {
    self.errors.first().map(|e| e.message.as_str()).unwrap_or("invalid request")
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let fields: Vec<&str> = self.errors.iter().map(|e| e.field).collect();
    write!(f, "{} (invalid: {})", self.message(), fields.join(", "))
  }
}

impl std::error::Error for ValidationErrors {}

#[derive(Default)]
struct Collector {
  errors: Vec<FieldError>,
}

impl Collector {
  /// Integer check with the given message; `None` records an error.
  fn int(&mut self, field: &'static str, raw: &str, message: String) -> Option<i32> {
    match raw.parse::<i32>() {
      Ok(value) => Some(value),
      Err(_) => {
        self.errors.push(FieldError::new(field, message));
        None
      }
    }
  }

  fn non_empty(&mut self, field: &'static str, raw: &str, message: &str) -> Option<String> {
    if raw.is_empty() {
      self.errors.push(FieldError::new(field, message));
      None
    } else {
      Some(raw.to_string())
    }
  }

  fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
    match value {
      Some(value) if self.errors.is_empty() => Ok(value),
      _ => Err(ValidationErrors { errors: self.errors }),
    }
  }
}

fn should_int(field: &str) -> String {
  format!("{} should int", field)
}

fn must_int(field: &str) -> String {
  format!("type of {} must int", field)
}

/// Validates a `POST /` body: price, then stock, then name.
pub fn validate_new_product(form: &ProductForm) -> Result<NewProduct, ValidationErrors> {
  let mut collector = Collector::default();
  let price = collector.int(
    "product_price",
    ProductForm::field(&form.product_price),
    should_int("product_price"),
  );
  let stock = collector.int(
    "product_stock",
    ProductForm::field(&form.product_stock),
    should_int("product_stock"),
  );
  let name = collector.non_empty("product_name", ProductForm::field(&form.product_name), MISSING_PRODUCT_NAME);

  let product = match (name, price, stock) {
    (Some(product_name), Some(product_price), Some(product_stock)) => Some(NewProduct {
      product_name,
      product_price,
      product_stock,
    }),
    _ => None,
  };
  collector.finish(product)
}

/// Validates a `PUT /` body: id, then price, then stock, then name.
pub fn validate_product_update(form: &ProductForm) -> Result<ProductUpdate, ValidationErrors> {
  let mut collector = Collector::default();
  let id = collector.int("product_id", ProductForm::field(&form.product_id), must_int("product_id"));
  let price = collector.int(
    "product_price",
    ProductForm::field(&form.product_price),
    must_int("product_price"),
  );
  let stock = collector.int(
    "product_stock",
    ProductForm::field(&form.product_stock),
    must_int("product_stock"),
  );
  let name = collector.non_empty("product_name", ProductForm::field(&form.product_name), MISSING_PRODUCT_NAME);

  let update = match (id, name, price, stock) {
    (Some(id), Some(product_name), Some(product_price), Some(product_stock)) => Some(ProductUpdate {
      id,
      product_name,
      product_price,
      product_stock,
    }),
    _ => None,
  };
  collector.finish(update)
}

/// Validates a product id from a query string or path segment. An absent or
/// empty value reports `missing_message`.
pub fn validate_product_id(raw: Option<&str>, missing_message: &str) -> Result<i32, ValidationErrors> {
  let mut collector = Collector::default();
  let id = match raw {
    None | Some("") => {
      collector.errors.push(FieldError::new("product_id", missing_message));
      None
    }
    Some(raw) => collector.int("product_id", raw, must_int("product_id")),
  };
  collector.finish(id)
}
