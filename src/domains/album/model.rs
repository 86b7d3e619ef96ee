use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct Album {
  pub id: Uuid,
  pub title: String,
  pub description: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AlbumPayload {
  pub title: String,
  #[serde(default)]
  pub description: String,
}

/// One row of the user/album join table.
#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct UserAlbum {
  pub user_id: Uuid,
  pub album_id: Uuid,
  pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserAlbumPayload {
  pub user_id: Uuid,
  pub album_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumResponse {
  pub album: Album,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumsResponse {
  pub albums: Vec<Album>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserAlbumResponse {
  pub album: UserAlbum,
}
