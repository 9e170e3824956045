// product_api/src/web/form.rs

//! Reads product fields from wherever a form post puts them: the query
//! string, a URL-encoded body or a multipart body. Body values win over
//! query values. A body that cannot be read counts as empty, so validation
//! reports the missing field instead of the request failing.

use actix_multipart::Multipart;
use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use futures_util::TryStreamExt;
use tracing::warn;

use crate::errors::AppError;
use crate::validation::ProductForm;

const MAX_MULTIPART_BYTES: usize = 64 * 1024;

impl FromRequest for ProductForm {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
    let req = req.clone();
    let mut payload = payload.take();

    Box::pin(async move {
      let query = web::Query::<ProductForm>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_else(|e| {
          warn!("Ignoring unreadable query string: {}", e);
          ProductForm::default()
        });
      let body = read_body(&req, &mut payload).await;
      Ok(body.merged_over(query))
    })
  }
}

async fn read_body(req: &HttpRequest, payload: &mut Payload) -> ProductForm {
  let content_type = req.content_type().to_ascii_lowercase();
  let result = match content_type.as_str() {
    "application/x-www-form-urlencoded" => web::Form::<ProductForm>::from_request(req, payload)
      .await
      .map(web::Form::into_inner)
      .map_err(|e| e.to_string()),
    "multipart/form-data" => read_multipart(req, payload.take()).await,
    _ => return ProductForm::default(),
  };

  result.unwrap_or_else(|e| {
    warn!(content_type = %content_type, "Ignoring unreadable form body: {}", e);
    ProductForm::default()
  })
}

async fn read_multipart(req: &HttpRequest, payload: Payload) -> Result<ProductForm, String> {
  let mut multipart = Multipart::new(req.headers(), payload);
  let mut form = ProductForm::default();
  let mut total = 0usize;

  while let Some(mut field) = multipart.try_next().await.map_err(|e| e.to_string())? {
    let name = field.name().map(str::to_owned);
    let mut value = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(|e| e.to_string())? {
      total += chunk.len();
      if total > MAX_MULTIPART_BYTES {
        return Err(format!("multipart body exceeds {} bytes", MAX_MULTIPART_BYTES));
      }
      value.extend_from_slice(&chunk);
    }
    if let Some(name) = name {
      form.set_if_absent(&name, String::from_utf8_lossy(&value).into_owned());
    }
  }

  Ok(form)
}
