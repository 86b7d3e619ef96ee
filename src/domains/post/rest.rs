use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{get, post},
  Router,
};

use super::model::{CreatePostRequest, PostDeletedResponse, PostResponse, PostsResponse, UpdatePostRequest};
use crate::{
  extractors::{parse_entity_id, AppJson},
  state::SharedAppState,
  AppError,
};

pub fn post_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/posts", get(get_posts_handler))
    .route("/posts/create", post(create_post_handler))
    .route(
      "/posts/{id}",
      get(get_post_handler).put(update_post_handler).delete(delete_post_handler),
    )
    .route("/users/{id}/posts", get(get_user_posts_handler))
}

pub async fn get_posts_handler(State(state): State<SharedAppState>) -> Result<JsonResponse<PostsResponse>, AppError> {
  let posts = state.post_service.list_posts().await?;
  Ok(JsonResponse(PostsResponse { posts }))
}

pub async fn get_post_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<PostResponse>, AppError> {
  let post = state.post_service.get_post(parse_entity_id(&id)?).await?;
  Ok(JsonResponse(PostResponse { post }))
}

pub async fn create_post_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<CreatePostRequest>,
) -> Result<(StatusCode, JsonResponse<PostResponse>), AppError> {
  let post = state.post_service.create_post(payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(PostResponse { post })))
}

pub async fn update_post_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
  AppJson(payload): AppJson<UpdatePostRequest>,
) -> Result<JsonResponse<PostResponse>, AppError> {
  let post = state.post_service.update_post(parse_entity_id(&id)?, payload).await?;
  Ok(JsonResponse(PostResponse { post }))
}

pub async fn delete_post_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<PostDeletedResponse>, AppError> {
  state.post_service.delete_post(parse_entity_id(&id)?).await?;
  Ok(JsonResponse(PostDeletedResponse {
    post: "deleted".to_string(),
  }))
}

pub async fn get_user_posts_handler(
  State(state): State<SharedAppState>,
  Path(user_id): Path<String>,
) -> Result<JsonResponse<PostsResponse>, AppError> {
  let posts = state.post_service.list_user_posts(parse_entity_id(&user_id)?).await?;
  Ok(JsonResponse(PostsResponse { posts }))
}
