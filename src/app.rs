use std::time::Duration;

use axum::{
  http::{header, HeaderName, Method},
  routing::get,
  Router,
};
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  domains::{album::rest::album_routes, post::rest::post_routes, user::rest::user_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(root_handler))
    .nest("/api/v1", user_routes().merge(album_routes()).merge(post_routes()))
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn root_handler() -> &'static str {
  "API Root"
}

/// Any origin is accepted; it is mirrored back because credentials are allowed.
fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::mirror_request())
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([
      header::ACCEPT,
      header::AUTHORIZATION,
      header::CONTENT_TYPE,
      HeaderName::from_static("x-csrf-token"),
    ])
    .expose_headers([header::LINK])
    .allow_credentials(true)
    .max_age(Duration::from_secs(300))
}
