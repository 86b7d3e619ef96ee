use async_trait::async_trait;
use uuid::Uuid;

use super::model::{CreatePostRequest, Post, UpdatePostRequest};
use crate::db::{Database, RepositoryError};

#[async_trait]
pub trait PostRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<Post>, RepositoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError>;
  async fn create(&self, post: &CreatePostRequest) -> Result<Post, RepositoryError>;
  async fn update(&self, id: Uuid, post: &UpdatePostRequest) -> Result<Option<Post>, RepositoryError>;
  async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
  async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Post>, RepositoryError>;
}

pub struct SqlxPostRepository {
  db: Database,
}

impl SqlxPostRepository {
  pub fn new(db: Database) -> Self {
    Self { db }
  }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
  async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Post>("SELECT id, user_id, content, created_at, updated_at FROM posts")
          .fetch_all(self.db.pool()),
      )
      .await
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Post>("SELECT id, user_id, content, created_at, updated_at FROM posts WHERE id = $1")
          .bind(id)
          .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn create(&self, post: &CreatePostRequest) -> Result<Post, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Post>(
          r#"
            INSERT INTO posts (user_id, content, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, user_id, content, created_at, updated_at
          "#,
        )
        .bind(post.user_id)
        .bind(&post.content)
        .fetch_one(self.db.pool()),
      )
      .await
  }

  async fn update(&self, id: Uuid, post: &UpdatePostRequest) -> Result<Option<Post>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Post>(
          r#"
            UPDATE posts
            SET content = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, user_id, content, created_at, updated_at
          "#,
        )
        .bind(&post.content)
        .bind(id)
        .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
    self
      .db
      .run(sqlx::query("DELETE FROM posts WHERE id = $1").bind(id).execute(self.db.pool()))
      .await?;
    Ok(())
  }

  async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Post>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Post>("SELECT id, user_id, content, created_at, updated_at FROM posts WHERE user_id = $1")
          .bind(user_id)
          .fetch_all(self.db.pool()),
      )
      .await
  }
}
