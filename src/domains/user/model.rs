use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored user. The password hash column is never selected into it, so it
/// cannot leak into a response.
#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct User {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub user_name: Option<String>,
  pub city: Option<String>,
  pub week_days: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserRequest {
  pub name: String,
  pub email: String,
  pub password: String,
  #[serde(default, alias = "username")]
  pub user_name: Option<String>,
  #[serde(default)]
  pub city: Option<String>,
  #[serde(default)]
  pub week_days: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpdateUserRequest {
  pub name: String,
  pub email: String,
}

/// Insert shape: the request with its password already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
  pub name: String,
  pub email: String,
  pub password_hash: String,
  pub user_name: Option<String>,
  pub city: Option<String>,
  pub week_days: Option<String>,
}

impl NewUser {
  pub fn from_request(req: CreateUserRequest, password_hash: String) -> Self {
    Self {
      name: req.name,
      email: req.email,
      password_hash,
      user_name: req.user_name,
      city: req.city,
      week_days: req.week_days,
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserResponse {
  pub user: User,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsersResponse {
  pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDeletedResponse {
  pub user: crate::models::MessageResponse,
}
