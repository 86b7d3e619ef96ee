use async_trait::async_trait;
use uuid::Uuid;

use super::model::{NewUser, UpdateUserRequest, User};
use crate::db::{Database, RepositoryError};

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
  async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, RepositoryError>;
  async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
  async fn update(&self, id: Uuid, changes: &UpdateUserRequest) -> Result<Option<User>, RepositoryError>;
  async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

pub struct SqlxUserRepository {
  db: Database,
}

impl SqlxUserRepository {
  pub fn new(db: Database) -> Self {
    Self { db }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, User>(
          r#"
            SELECT id, name, email, user_name, city, week_days, created_at, updated_at
            FROM users
          "#,
        )
        .fetch_all(self.db.pool()),
      )
      .await
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, User>(
          r#"
            SELECT id, name, email, user_name, city, week_days, created_at, updated_at
            FROM users
            WHERE id = $1
          "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, RepositoryError> {
    tracing::debug!(user_name, "Looking up user by username");

    self
      .db
      .run(
        sqlx::query_as::<_, User>(
          r#"
            SELECT id, name, email, user_name, city, week_days, created_at, updated_at
            FROM users
            WHERE user_name = $1
          "#,
        )
        .bind(user_name)
        .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, User>(
          r#"
            INSERT INTO users (name, email, password, user_name, city, week_days, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, name, email, user_name, city, week_days, created_at, updated_at
          "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.user_name)
        .bind(&user.city)
        .bind(&user.week_days)
        .fetch_one(self.db.pool()),
      )
      .await
  }

  async fn update(&self, id: Uuid, changes: &UpdateUserRequest) -> Result<Option<User>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, User>(
          r#"
            UPDATE users
            SET name = $1, email = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, email, user_name, city, week_days, created_at, updated_at
          "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(id)
        .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
    self
      .db
      .run(sqlx::query("DELETE FROM users WHERE id = $1").bind(id).execute(self.db.pool()))
      .await?;
    Ok(())
  }
}
