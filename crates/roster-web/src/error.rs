//! Error type and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[from] roster_store_sqlite::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      // Storage failures are not recovered or retried; surface them as a
      // bare 500 and let the operator retry by hand.
      Error::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
