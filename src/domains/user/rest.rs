use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{get, post},
  Router,
};

use super::model::{CreateUserRequest, UpdateUserRequest, UserDeletedResponse, UserResponse, UsersResponse};
use crate::{
  extractors::{parse_entity_id, AppJson},
  models::MessageResponse,
  state::SharedAppState,
  AppError,
};

pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/users", get(get_users_handler))
    .route("/users/create", post(create_user_handler))
    .route(
      "/users/{id}",
      get(get_user_handler).put(update_user_handler).delete(delete_user_handler),
    )
}

pub async fn get_users_handler(State(state): State<SharedAppState>) -> Result<JsonResponse<UsersResponse>, AppError> {
  let users = state.user_service.list_users().await?;
  Ok(JsonResponse(UsersResponse {
    users: state.placeholders.fill_all(users),
  }))
}

/// Segments that parse as an id are looked up by id, anything else by username.
pub async fn get_user_handler(
  State(state): State<SharedAppState>,
  Path(key): Path<String>,
) -> Result<JsonResponse<UserResponse>, AppError> {
  let user = match parse_entity_id(&key) {
    Ok(id) => {
      let user = state.user_service.get_user_by_id(id).await?;
      state.placeholders.fill(user)
    }
    Err(_) => state.user_service.get_user_by_user_name(&key).await?,
  };

  Ok(JsonResponse(UserResponse { user }))
}

pub async fn create_user_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, JsonResponse<UserResponse>), AppError> {
  let user = state.user_service.create_user(payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(UserResponse { user })))
}

pub async fn update_user_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
  AppJson(payload): AppJson<UpdateUserRequest>,
) -> Result<JsonResponse<UserResponse>, AppError> {
  let id = parse_entity_id(&id)?;
  let user = state.user_service.update_user(id, payload).await?;
  Ok(JsonResponse(UserResponse { user }))
}

pub async fn delete_user_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<UserDeletedResponse>, AppError> {
  let id = parse_entity_id(&id)?;
  state.user_service.delete_user(id).await?;
  Ok(JsonResponse(UserDeletedResponse {
    user: MessageResponse::new("User deleted"),
  }))
}
