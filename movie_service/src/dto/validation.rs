// movie_service/src/dto/validation.rs

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::MovieDto;
use crate::errors::{AppError, Result};

/// One failed field rule, as reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field: String,
  pub message: String,
}

pub(crate) fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(ValidationError::new("blank"));
  }
  Ok(())
}

/// Runs the field rules on `dto` and returns every violation at once, sorted by field name.
pub fn validate_movie(dto: &MovieDto) -> Result<()> {
  match dto.validate() {
    Ok(()) => Ok(()),
    Err(errors) => Err(AppError::Validation(collect_violations(&errors))),
  }
}

fn collect_violations(errors: &ValidationErrors) -> Vec<Violation> {
  let mut violations: Vec<Violation> = errors
    .field_errors()
    .into_iter()
    .flat_map(|(field, field_errors)| {
      let field = field.to_string();
      field_errors.iter().map(move |error| Violation {
        field: field.clone(),
        message: error
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| error.code.to_string()),
      })
    })
    .collect();
  violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
  violations
}
