use std::sync::LazyLock;

use axum::extract::FromRequest;
use regex::Regex;
use uuid::Uuid;

use crate::AppError;

static IDENTIFIER_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-fA-F0-9\-]+$").expect("identifier pattern compiles"));

/// JSON body extractor whose rejections always become 400 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

fn looks_like_identifier(segment: &str) -> bool {
  IDENTIFIER_PATTERN.is_match(segment)
}

/// Parses an instance path segment. Segments outside the identifier pattern,
/// or that cannot name a stored row, answer 404 like an unmatched route.
pub fn parse_entity_id(segment: &str) -> Result<Uuid, AppError> {
  if !looks_like_identifier(segment) {
    return Err(AppError::not_found("Not Found"));
  }
  Uuid::parse_str(segment).map_err(|_| AppError::not_found("Not Found"))
}
