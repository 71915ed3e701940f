// movie_service/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::dto::Violation;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {}", summarize(.0))]
  Validation(Vec<Violation>),

  // Malformed request bodies and path segments.
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("User {0} not found")]
  UnknownUser(i64),

  #[error("Resource Not Found")]
  NotFound,

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

fn summarize(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(|v| format!("{}: {}", v.field, v.message))
    .collect::<Vec<_>>()
    .join("; ")
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::BadRequest(_) | AppError::UnknownUser(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Migrate(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }

    match self {
      AppError::Validation(violations) => HttpResponse::BadRequest().json(json!({
        "error": "Validation failed",
        "violations": violations,
      })),
      AppError::BadRequest(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::UnknownUser(_) => HttpResponse::BadRequest().json(json!({"error": self.to_string()})),
      // Not-found responses carry no body.
      AppError::NotFound => HttpResponse::NotFound().finish(),
      AppError::Config(_) => HttpResponse::InternalServerError().json(json!({"error": "Configuration issue"})),
      AppError::Sqlx(_) | AppError::Migrate(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
