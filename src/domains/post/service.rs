use async_trait::async_trait;
use uuid::Uuid;

use super::{
  model::{CreatePostRequest, Post, UpdatePostRequest},
  repository::PostRepository,
};
use crate::error::ServiceError;

const POST_NOT_FOUND: &str = "Post not found";

#[async_trait]
pub trait PostService: Send + Sync {
  async fn list_posts(&self) -> Result<Vec<Post>, ServiceError>;
  async fn get_post(&self, id: Uuid) -> Result<Post, ServiceError>;
  async fn create_post(&self, req: CreatePostRequest) -> Result<Post, ServiceError>;
  async fn update_post(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, ServiceError>;
  async fn delete_post(&self, id: Uuid) -> Result<(), ServiceError>;
  async fn list_user_posts(&self, user_id: Uuid) -> Result<Vec<Post>, ServiceError>;
}

pub struct PostServiceImpl<P> {
  post_repository: P,
}

impl<P> PostServiceImpl<P>
where
  P: PostRepository,
{
  pub fn new(post_repository: P) -> Self {
    Self { post_repository }
  }
}

#[async_trait]
impl<P> PostService for PostServiceImpl<P>
where
  P: PostRepository,
{
  async fn list_posts(&self) -> Result<Vec<Post>, ServiceError> {
    Ok(self.post_repository.find_all().await?)
  }

  async fn get_post(&self, id: Uuid) -> Result<Post, ServiceError> {
    self
      .post_repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| ServiceError::NotFound(POST_NOT_FOUND.to_string()))
  }

  async fn create_post(&self, req: CreatePostRequest) -> Result<Post, ServiceError> {
    Ok(self.post_repository.create(&req).await?)
  }

  async fn update_post(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, ServiceError> {
    self
      .post_repository
      .update(id, &req)
      .await?
      .ok_or_else(|| ServiceError::NotFound(POST_NOT_FOUND.to_string()))
  }

  async fn delete_post(&self, id: Uuid) -> Result<(), ServiceError> {
    Ok(self.post_repository.delete(id).await?)
  }

  async fn list_user_posts(&self, user_id: Uuid) -> Result<Vec<Post>, ServiceError> {
    Ok(self.post_repository.find_by_user(user_id).await?)
  }
}
