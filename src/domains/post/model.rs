use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct Post {
  pub id: Uuid,
  pub user_id: Uuid,
  pub content: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreatePostRequest {
  pub user_id: Uuid,
  pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpdatePostRequest {
  pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostResponse {
  pub post: Post,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostsResponse {
  pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostDeletedResponse {
  pub post: String,
}
