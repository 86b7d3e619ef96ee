use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::error::ServiceError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn conflict(message: impl Into<String>) -> Self {
    Self::new(StatusCode::CONFLICT, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    if self.status_code.is_server_error() {
      tracing::error!(status = self.status_code.as_u16(), "{}", self.message);
    } else {
      tracing::warn!(status = self.status_code.as_u16(), "{}", self.message);
    }

    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    AppError::bad_request(rejection.body_text())
  }
}

impl From<ServiceError> for AppError {
  fn from(error: ServiceError) -> Self {
    match error {
      ServiceError::NotFound(msg) => AppError::not_found(msg),
      ServiceError::Conflict(msg) => AppError::conflict(msg),
      ServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn service_errors_map_to_status_codes() {
    let cases = [
      (ServiceError::NotFound("User not found".to_string()), StatusCode::NOT_FOUND),
      (ServiceError::Conflict("Email already in use".to_string()), StatusCode::CONFLICT),
      (
        ServiceError::InternalServerError("Database error".to_string()),
        StatusCode::INTERNAL_SERVER_ERROR,
      ),
    ];

    for (error, expected) in cases {
      assert_eq!(StatusCode::from(AppError::from(error)), expected);
    }
  }

  #[tokio::test]
  async fn error_body_carries_message_and_status() {
    let response = AppError::not_found("User not found").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .expect("read body");
    let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value["error"], "User not found");
    assert_eq!(value["status_code"], 404);
  }
}
