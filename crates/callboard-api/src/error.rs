//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Pipeline(#[from] callboard_moderation::Error),

  /// A direct store read (catalog endpoints) failed.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("not found: {0}")]
  NotFound(String),
}

impl ApiError {
  pub fn store<E>(cause: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(cause))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    use callboard_moderation::Error as Pipeline;

    let (status, message) = match &self {
      ApiError::Pipeline(e) => match e {
        Pipeline::Validation(_) => {
          (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        Pipeline::Auth(_) => (StatusCode::UNAUTHORIZED, e.to_string()),
        Pipeline::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        Pipeline::Conflict(_) => (StatusCode::CONFLICT, e.to_string()),
        Pipeline::Store(_) => {
          (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
      },
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
