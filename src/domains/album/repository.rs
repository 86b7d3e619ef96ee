use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Album, AlbumPayload, UserAlbum};
use crate::db::{Database, RepositoryError};

#[async_trait]
pub trait AlbumRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<Album>, RepositoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Album>, RepositoryError>;
  async fn create(&self, album: &AlbumPayload) -> Result<Album, RepositoryError>;
  async fn update(&self, id: Uuid, album: &AlbumPayload) -> Result<Option<Album>, RepositoryError>;
  async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
  async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Album>, RepositoryError>;
  async fn add_to_user(&self, user_id: Uuid, album_id: Uuid) -> Result<UserAlbum, RepositoryError>;
  async fn remove_from_user(&self, user_id: Uuid, album_id: Uuid) -> Result<(), RepositoryError>;
}

pub struct SqlxAlbumRepository {
  db: Database,
}

impl SqlxAlbumRepository {
  pub fn new(db: Database) -> Self {
    Self { db }
  }
}

#[async_trait]
impl AlbumRepository for SqlxAlbumRepository {
  async fn find_all(&self) -> Result<Vec<Album>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Album>("SELECT id, title, description, created_at, updated_at FROM albums")
          .fetch_all(self.db.pool()),
      )
      .await
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Album>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Album>("SELECT id, title, description, created_at, updated_at FROM albums WHERE id = $1")
          .bind(id)
          .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn create(&self, album: &AlbumPayload) -> Result<Album, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Album>(
          r#"
            INSERT INTO albums (title, description, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, title, description, created_at, updated_at
          "#,
        )
        .bind(&album.title)
        .bind(&album.description)
        .fetch_one(self.db.pool()),
      )
      .await
  }

  async fn update(&self, id: Uuid, album: &AlbumPayload) -> Result<Option<Album>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Album>(
          r#"
            UPDATE albums
            SET title = $1, description = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, title, description, created_at, updated_at
          "#,
        )
        .bind(&album.title)
        .bind(&album.description)
        .bind(id)
        .fetch_optional(self.db.pool()),
      )
      .await
  }

  async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
    self
      .db
      .run(sqlx::query("DELETE FROM albums WHERE id = $1").bind(id).execute(self.db.pool()))
      .await?;
    Ok(())
  }

  async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Album>, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, Album>(
          r#"
            SELECT a.id, a.title, a.description, a.created_at, a.updated_at
            FROM albums a
            JOIN user_albums ua ON a.id = ua.album_id
            WHERE ua.user_id = $1
          "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool()),
      )
      .await
  }

  async fn add_to_user(&self, user_id: Uuid, album_id: Uuid) -> Result<UserAlbum, RepositoryError> {
    self
      .db
      .run(
        sqlx::query_as::<_, UserAlbum>(
          r#"
            INSERT INTO user_albums (user_id, album_id, added_at)
            VALUES ($1, $2, NOW())
            RETURNING user_id, album_id, added_at
          "#,
        )
        .bind(user_id)
        .bind(album_id)
        .fetch_one(self.db.pool()),
      )
      .await
  }

  async fn remove_from_user(&self, user_id: Uuid, album_id: Uuid) -> Result<(), RepositoryError> {
    self
      .db
      .run(
        sqlx::query("DELETE FROM user_albums WHERE user_id = $1 AND album_id = $2")
          .bind(user_id)
          .bind(album_id)
          .execute(self.db.pool()),
      )
      .await?;
    Ok(())
  }
}
