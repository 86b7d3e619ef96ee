use thiserror::Error;

use crate::db::RepositoryError;

/// Failure of a domain service, already classified for the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("Not Found: {0}")]
  NotFound(String),
  #[error("Conflict: {0}")]
  Conflict(String),
  #[error("Internal Server Error: {0}")]
  InternalServerError(String),
}

impl From<RepositoryError> for ServiceError {
  fn from(err: RepositoryError) -> Self {
    match err {
      RepositoryError::Conflict(msg) => ServiceError::Conflict(msg),
      RepositoryError::MissingReference => ServiceError::NotFound("Referenced user or album not found".to_string()),
      RepositoryError::Timeout(limit) => {
        ServiceError::InternalServerError(format!("Database operation timed out after {:?}", limit))
      }
      RepositoryError::Database(e) => {
        tracing::error!("Database error: {:?}", e);
        ServiceError::InternalServerError("Internal server error occurred".to_string())
      }
    }
  }
}
