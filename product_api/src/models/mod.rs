// product_api/src/models/mod.rs

//! Contains data structures representing database entities and the response wrapper.

pub mod envelope;
pub mod product;

pub use envelope::{Envelope, EnvelopeType};
pub use product::{NewProduct, Product, ProductUpdate};
