use albums_api::{
  app::{create_app, root_handler},
  db::Database,
  domains::user::placeholder::ProfilePlaceholders,
  state::SharedAppState,
};
use axum::{
  body::Body,
  http::{self, Request, StatusCode},
  Router,
};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt; // for `app.oneshot()`

fn router() -> Router {
  let pool = PgPoolOptions::new()
    .connect_lazy("postgres://localhost/unreachable")
    .unwrap();
  create_app(SharedAppState::new(
    Database::with_default_timeout(pool),
    ProfilePlaceholders::new(Some(1)),
  ))
}

#[tokio::test]
async fn root_test() {
  let app = router();

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = response.into_body().collect().await.unwrap().to_bytes();

  assert_eq!(&body[..], b"API Root");
}

#[tokio::test]
async fn root_handler_test() {
  assert_eq!(root_handler().await, "API Root");
}

#[tokio::test]
async fn test_unknown_route_not_found() {
  let app = router();

  let response = app
    .oneshot(
      Request::builder()
        .uri("/api/v2/users")
        .method(http::Method::GET)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
  let app = router();

  let response = app
    .oneshot(
      Request::builder()
        .uri("/api/v1/posts/create")
        .method(http::Method::GET)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
