use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceExt;

use crate::{
  app::create_app, db::Database, domains::user::placeholder::ProfilePlaceholders, state::SharedAppState,
};

pub async fn app_with_pool(pool: PgPool) -> Router {
  let state = SharedAppState::new(Database::with_default_timeout(pool), ProfilePlaceholders::new(Some(7)));
  create_app(state)
}

/// App over a pool that never connects; only usable for requests rejected
/// before any query runs.
pub fn app_without_database() -> Router {
  let pool = PgPoolOptions::new()
    .connect_lazy("postgres://localhost/unreachable")
    .expect("lazy pool");
  let state = SharedAppState::new(Database::with_default_timeout(pool), ProfilePlaceholders::new(Some(7)));
  create_app(state)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

async fn send_json<T: Serialize>(app: Router, method: Method, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");
  send(app, request).await
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  send_json(app, Method::POST, uri, body).await
}

pub async fn put_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  send_json(app, Method::PUT, uri, body).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder().uri(uri).body(Body::empty()).expect("build request");
  send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(Method::DELETE)
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}
