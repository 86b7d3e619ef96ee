use async_trait::async_trait;
use uuid::Uuid;

use super::{
  model::{Album, AlbumPayload, UserAlbum, UserAlbumPayload},
  repository::AlbumRepository,
};
use crate::error::ServiceError;

const ALBUM_NOT_FOUND: &str = "Album not found";

#[async_trait]
pub trait AlbumService: Send + Sync {
  async fn list_albums(&self) -> Result<Vec<Album>, ServiceError>;
  async fn get_album(&self, id: Uuid) -> Result<Album, ServiceError>;
  async fn create_album(&self, payload: AlbumPayload) -> Result<Album, ServiceError>;
  async fn update_album(&self, id: Uuid, payload: AlbumPayload) -> Result<Album, ServiceError>;
  async fn delete_album(&self, id: Uuid) -> Result<(), ServiceError>;
  async fn list_user_albums(&self, user_id: Uuid) -> Result<Vec<Album>, ServiceError>;
  async fn add_album_to_user(&self, payload: UserAlbumPayload) -> Result<UserAlbum, ServiceError>;
  async fn remove_album_from_user(&self, user_id: Uuid, album_id: Uuid) -> Result<(), ServiceError>;
}

pub struct AlbumServiceImpl<A> {
  album_repository: A,
}

impl<A> AlbumServiceImpl<A>
where
  A: AlbumRepository,
{
  pub fn new(album_repository: A) -> Self {
    Self { album_repository }
  }
}

#[async_trait]
impl<A> AlbumService for AlbumServiceImpl<A>
where
  A: AlbumRepository,
{
  async fn list_albums(&self) -> Result<Vec<Album>, ServiceError> {
    Ok(self.album_repository.find_all().await?)
  }

  async fn get_album(&self, id: Uuid) -> Result<Album, ServiceError> {
    self
      .album_repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| ServiceError::NotFound(ALBUM_NOT_FOUND.to_string()))
  }

  async fn create_album(&self, payload: AlbumPayload) -> Result<Album, ServiceError> {
    Ok(self.album_repository.create(&payload).await?)
  }

  async fn update_album(&self, id: Uuid, payload: AlbumPayload) -> Result<Album, ServiceError> {
    self
      .album_repository
      .update(id, &payload)
      .await?
      .ok_or_else(|| ServiceError::NotFound(ALBUM_NOT_FOUND.to_string()))
  }

  async fn delete_album(&self, id: Uuid) -> Result<(), ServiceError> {
    Ok(self.album_repository.delete(id).await?)
  }

  async fn list_user_albums(&self, user_id: Uuid) -> Result<Vec<Album>, ServiceError> {
    Ok(self.album_repository.find_by_user(user_id).await?)
  }

  async fn add_album_to_user(&self, payload: UserAlbumPayload) -> Result<UserAlbum, ServiceError> {
    Ok(
      self
        .album_repository
        .add_to_user(payload.user_id, payload.album_id)
        .await?,
    )
  }

  async fn remove_album_from_user(&self, user_id: Uuid, album_id: Uuid) -> Result<(), ServiceError> {
    Ok(self.album_repository.remove_from_user(user_id, album_id).await?)
  }
}
