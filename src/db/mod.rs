use std::{future::Future, time::Duration};

use sqlx::PgPool;

pub mod error;
pub mod pool;

pub use error::RepositoryError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Storage context handed to every repository: the shared pool plus the
/// deadline applied to each single operation.
#[derive(Debug, Clone)]
pub struct Database {
  pool: PgPool,
  timeout: Duration,
}

impl Database {
  pub fn new(pool: PgPool, timeout: Duration) -> Self {
    Self { pool, timeout }
  }

  pub fn with_default_timeout(pool: PgPool) -> Self {
    Self::new(pool, DEFAULT_TIMEOUT)
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }

  /// Runs one query future under the operation timeout. A timeout drops the
  /// in-flight query only; nothing else is rolled back.
  pub async fn run<T, F>(&self, operation: F) -> Result<T, RepositoryError>
  where
    F: Future<Output = Result<T, sqlx::Error>>,
  {
    match tokio::time::timeout(self.timeout, operation).await {
      Ok(result) => result.map_err(RepositoryError::from),
      Err(_) => {
        tracing::error!("Database operation exceeded {:?}", self.timeout);
        Err(RepositoryError::Timeout(self.timeout))
      }
    }
  }
}
