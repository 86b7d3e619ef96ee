use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{delete, get, post},
  Router,
};

use super::model::{AlbumPayload, AlbumResponse, AlbumsResponse, UserAlbumPayload, UserAlbumResponse};
use crate::{
  extractors::{parse_entity_id, AppJson},
  models::MessageResponse,
  state::SharedAppState,
  AppError,
};

pub fn album_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/albums", get(get_albums_handler))
    .route("/albums/create", post(create_album_handler))
    .route("/albums/save", post(add_album_to_user_handler))
    .route(
      "/albums/{id}",
      get(get_album_handler).put(update_album_handler).delete(delete_album_handler),
    )
    .route("/users/{id}/albums", get(get_user_albums_handler))
    .route("/users/{id}/albums/{album_id}", delete(remove_album_from_user_handler))
}

pub async fn get_albums_handler(State(state): State<SharedAppState>) -> Result<JsonResponse<AlbumsResponse>, AppError> {
  let albums = state.album_service.list_albums().await?;
  Ok(JsonResponse(AlbumsResponse { albums }))
}

pub async fn get_album_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<AlbumResponse>, AppError> {
  let album = state.album_service.get_album(parse_entity_id(&id)?).await?;
  Ok(JsonResponse(AlbumResponse { album }))
}

pub async fn create_album_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<AlbumPayload>,
) -> Result<(StatusCode, JsonResponse<AlbumResponse>), AppError> {
  let album = state.album_service.create_album(payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(AlbumResponse { album })))
}

pub async fn update_album_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
  AppJson(payload): AppJson<AlbumPayload>,
) -> Result<JsonResponse<AlbumResponse>, AppError> {
  let album = state.album_service.update_album(parse_entity_id(&id)?, payload).await?;
  Ok(JsonResponse(AlbumResponse { album }))
}

pub async fn delete_album_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  state.album_service.delete_album(parse_entity_id(&id)?).await?;
  Ok(JsonResponse(MessageResponse::new("Album deleted successfully")))
}

pub async fn get_user_albums_handler(
  State(state): State<SharedAppState>,
  Path(user_id): Path<String>,
) -> Result<JsonResponse<AlbumsResponse>, AppError> {
  let albums = state.album_service.list_user_albums(parse_entity_id(&user_id)?).await?;
  Ok(JsonResponse(AlbumsResponse { albums }))
}

pub async fn add_album_to_user_handler(
  State(state): State<SharedAppState>,
  AppJson(payload): AppJson<UserAlbumPayload>,
) -> Result<(StatusCode, JsonResponse<UserAlbumResponse>), AppError> {
  let album = state.album_service.add_album_to_user(payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(UserAlbumResponse { album })))
}

pub async fn remove_album_from_user_handler(
  State(state): State<SharedAppState>,
  Path((user_id, album_id)): Path<(String, String)>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  state
    .album_service
    .remove_album_from_user(parse_entity_id(&user_id)?, parse_entity_id(&album_id)?)
    .await?;
  Ok(JsonResponse(MessageResponse::new("Album removed from user successfully")))
}

#[cfg(test)]
mod tests {
  use crate::test_support::{app_with_pool, delete, get, post_json, put_json};
  use axum::http::StatusCode;
  use serde_json::{json, Value};

  async fn create_user(app: axum::Router) -> String {
    let payload = json!({"name": "Owner", "email": "owner@x.com", "username": "owner", "password": "secret"});
    let (status, body) = post_json(app, "/api/v1/users/create", &payload).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body).expect("deserialize response");
    created["user"]["id"].as_str().expect("id").to_string()
  }

  async fn create_album(app: axum::Router, title: &str) -> String {
    let (status, body) = post_json(
      app,
      "/api/v1/albums/create",
      &json!({"title": title, "description": "photos"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(created["album"]["title"], title);
    created["album"]["id"].as_str().expect("id").to_string()
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn album_crud_endpoints(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool).await;
    let id = create_album(app.clone(), "Trip").await;
    let uri = format!("/api/v1/albums/{}", id);

    let (status, body) = get(app.clone(), "/api/v1/albums").await;
    assert_eq!(status, StatusCode::OK);
    let listed: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(listed["albums"].as_array().map(Vec::len), Some(1));

    let (status, body) = put_json(app.clone(), &uri, &json!({"title": "Trip 2", "description": "more"})).await;
    assert_eq!(status, StatusCode::OK);
    let updated: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(updated["album"]["title"], "Trip 2");

    let (status, body) = delete(app.clone(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(deleted["message"], "Album deleted successfully");

    let (status, body) = get(app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let missing: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(missing["error"], "Album not found");
    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn save_and_remove_album_for_user(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool).await;
    let user_id = create_user(app.clone()).await;
    let album_id = create_album(app.clone(), "Favourites").await;

    let (status, body) = post_json(
      app.clone(),
      "/api/v1/albums/save",
      &json!({"user_id": user_id, "album_id": album_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let saved: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(saved["album"]["album_id"], album_id.as_str());
    assert!(saved["album"]["added_at"].is_string());

    let user_albums_uri = format!("/api/v1/users/{}/albums", user_id);
    let (status, body) = get(app.clone(), &user_albums_uri).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(listed["albums"][0]["id"], album_id.as_str());

    let (status, body) = delete(app.clone(), &format!("{}/{}", user_albums_uri, album_id)).await;
    assert_eq!(status, StatusCode::OK);
    let removed: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(removed["message"], "Album removed from user successfully");

    let (_, body) = get(app, &user_albums_uri).await;
    let listed: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(listed["albums"].as_array().map(Vec::len), Some(0));
    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn saving_for_unknown_user_is_not_found(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool).await;
    let album_id = create_album(app.clone(), "Orphan").await;

    let (status, _) = post_json(
      app,
      "/api/v1/albums/save",
      &json!({"user_id": uuid::Uuid::new_v4(), "album_id": album_id}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
  }
}
