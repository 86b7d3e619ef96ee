use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("{0}")]
  Conflict(String),
  #[error("referenced record does not exist")]
  MissingReference,
  #[error("database operation timed out after {0:?}")]
  Timeout(Duration),
  #[error("database error: {0}")]
  Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(err: sqlx::Error) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      if db_err.is_unique_violation() {
        return RepositoryError::Conflict(conflict_message(db_err.constraint()).to_string());
      }
      if db_err.is_foreign_key_violation() {
        return RepositoryError::MissingReference;
      }
    }
    RepositoryError::Database(err)
  }
}

/// Maps the violated unique constraint to the message shown to clients.
pub fn conflict_message(constraint: Option<&str>) -> &'static str {
  match constraint {
    Some(name) if name.contains("email") => "Email already in use",
    Some(name) if name.contains("user_name") => "Username already exists",
    _ => "Resource already exists",
  }
}
