use async_trait::async_trait;
use uuid::Uuid;

use super::{
  model::{CreateUserRequest, NewUser, UpdateUserRequest, User},
  repository::UserRepository,
};
use crate::error::ServiceError;

const USER_NOT_FOUND: &str = "User not found";

#[async_trait]
pub trait UserService: Send + Sync {
  async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
  async fn get_user_by_id(&self, id: Uuid) -> Result<User, ServiceError>;
  async fn get_user_by_user_name(&self, user_name: &str) -> Result<User, ServiceError>;
  async fn create_user(&self, req: CreateUserRequest) -> Result<User, ServiceError>;
  async fn update_user(&self, id: Uuid, req: UpdateUserRequest) -> Result<User, ServiceError>;
  async fn delete_user(&self, id: Uuid) -> Result<(), ServiceError>;
}

pub struct UserServiceImpl<U> {
  user_repository: U,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U) -> Self {
    Self { user_repository }
  }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
    Ok(self.user_repository.find_all().await?)
  }

  async fn get_user_by_id(&self, id: Uuid) -> Result<User, ServiceError> {
    self
      .user_repository
      .find_by_id(id)
      .await?
      .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.to_string()))
  }

  async fn get_user_by_user_name(&self, user_name: &str) -> Result<User, ServiceError> {
    let user = self.user_repository.find_by_user_name(user_name).await?;

    match user {
      Some(user) => Ok(user),
      None => {
        tracing::info!("User with username {} not found", user_name);
        Err(ServiceError::NotFound(USER_NOT_FOUND.to_string()))
      }
    }
  }

  async fn create_user(&self, req: CreateUserRequest) -> Result<User, ServiceError> {
    let password = req.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || crate::utils::hash_password(&password))
      .await
      .map_err(|e| ServiceError::InternalServerError(format!("Password hashing task failed: {}", e)))?
      .map_err(|e| ServiceError::InternalServerError(format!("Failed to hash password: {}", e)))?;

    let user = self
      .user_repository
      .create(&NewUser::from_request(req, password_hash))
      .await?;

    tracing::info!("Created user {}", user.id);
    Ok(user)
  }

  async fn update_user(&self, id: Uuid, req: UpdateUserRequest) -> Result<User, ServiceError> {
    self
      .user_repository
      .update(id, &req)
      .await?
      .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.to_string()))
  }

  async fn delete_user(&self, id: Uuid) -> Result<(), ServiceError> {
    self.user_repository.delete(id).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{db::Database, domains::user::repository::SqlxUserRepository};
  use sqlx::PgPool;

  fn service(pool: PgPool) -> UserServiceImpl<SqlxUserRepository> {
    UserServiceImpl::new(SqlxUserRepository::new(Database::with_default_timeout(pool)))
  }

  fn ana() -> CreateUserRequest {
    CreateUserRequest {
      name: "Ana".to_string(),
      email: "ana@x.com".to_string(),
      password: "secret".to_string(),
      user_name: Some("ana1".to_string()),
      city: Some("Recife".to_string()),
      week_days: None,
    }
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn test_create_then_get_round_trip(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let service = service(pool);

    let created = service.create_user(ana()).await?;
    let fetched = service.get_user_by_id(created.id).await?;

    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.email, "ana@x.com");
    assert_eq!(fetched.user_name.as_deref(), Some("ana1"));
    assert_eq!(fetched.city.as_deref(), Some("Recife"));
    assert_eq!(fetched.week_days, None);
    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn test_create_with_used_email_conflicts(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let service = service(pool);
    service.create_user(ana()).await?;

    let mut again = ana();
    again.user_name = Some("ana2".to_string());
    let result = service.create_user(again).await;
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn test_get_unknown_user_is_not_found(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let service = service(pool);

    assert!(matches!(
      service.get_user_by_id(Uuid::new_v4()).await,
      Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
      service.get_user_by_user_name("ghost").await,
      Err(ServiceError::NotFound(_))
    ));
    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn test_update_with_taken_email_conflicts(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let service = service(pool);
    service.create_user(ana()).await?;

    let mut other = ana();
    other.email = "bia@x.com".to_string();
    other.user_name = Some("bia".to_string());
    let bia = service.create_user(other).await?;

    let result = service
      .update_user(
        bia.id,
        UpdateUserRequest {
          name: "Bia".to_string(),
          email: "ana@x.com".to_string(),
        },
      )
      .await;
    assert!(matches!(result, Err(ServiceError::Conflict(msg)) if msg == "Email already in use"));
    Ok(())
  }
}
