//! Error taxonomy for the moderation pipeline.
//!
//! Validation and auth errors are produced at the intake boundary and never
//! reach the decision engine. Store errors carry the backend's cause
//! verbatim for the operator to diagnose; the pipeline attempts no retries
//! of its own.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field is missing or malformed. Recoverable locally by
  /// re-prompting the user.
  #[error("validation failed: {0}")]
  Validation(String),

  /// No identity, or an insufficient role, for the attempted operation.
  #[error("not allowed: {0}")]
  Auth(&'static str),

  /// The target id vanished. For decisions this usually means the item was
  /// already handled.
  #[error("not found: {0}")]
  NotFound(Uuid),

  /// A duplicate create on a uniquely-constrained pair that could not be
  /// absorbed as a no-op.
  #[error("conflict: {0}")]
  Conflict(String),

  /// The underlying content store failed; the cause is surfaced verbatim.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  pub(crate) fn store<E>(cause: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(cause))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
