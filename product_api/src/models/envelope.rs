// product_api/src/models/envelope.rs

//! The `{type, data|message}` wrapper every JSON response is sent in.

use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeType {
  Success,
  Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
  #[serde(rename = "type")]
  pub kind: EnvelopeType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<Vec<Product>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl Envelope {
  pub fn data(products: Vec<Product>) -> Self {
    Self {
      kind: EnvelopeType::Success,
      data: Some(products),
      message: None,
    }
  }

  pub fn success(message: impl Into<String>) -> Self {
    Self {
      kind: EnvelopeType::Success,
      data: None,
      message: Some(message.into()),
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      kind: EnvelopeType::Error,
      data: None,
      message: Some(message.into()),
    }
  }

  pub fn is_success(&self) -> bool {
    self.kind == EnvelopeType::Success
  }
}
