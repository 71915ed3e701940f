// tests/validation_tests.rs
#[macro_use]
mod common;
use common::*;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use movie_service::dto::{validate_movie, MovieDto};
use movie_service::AppError;
use serde_json::{json, Value};

fn violated_fields(dto: &MovieDto) -> Vec<String> {
  match validate_movie(dto) {
    Ok(()) => Vec::new(),
    Err(AppError::Validation(violations)) => violations.into_iter().map(|v| v.field).collect(),
    Err(other) => panic!("Expected AppError::Validation, got {:?}", other),
  }
}

#[test]
fn test_valid_movie_passes() {
  assert!(validate_movie(&MovieDto::new("Dune", "Sci-Fi", 9)).is_ok());
  assert!(validate_movie(&MovieDto::new("Dune", "Sci-Fi", 0)).is_ok());
  assert!(validate_movie(&MovieDto::new("Dune", "Sci-Fi", 10)).is_ok());
}

#[test]
fn test_blank_strings_are_rejected() {
  assert_eq!(violated_fields(&MovieDto::new("", "Sci-Fi", 5)), vec!["title"]);
  assert_eq!(violated_fields(&MovieDto::new("Dune", " \t ", 5)), vec!["genre"]);
}

#[test]
fn test_rating_outside_bounds_is_rejected() {
  assert_eq!(violated_fields(&MovieDto::new("Dune", "Sci-Fi", 11)), vec!["rating"]);
  assert_eq!(violated_fields(&MovieDto::new("Dune", "Sci-Fi", -1)), vec!["rating"]);
}

#[test]
fn test_all_violations_are_reported_together() {
  let fields = violated_fields(&MovieDto::new(" ", "", 42));
  assert_eq!(fields, vec!["genre", "rating", "title"]);
}

#[actix_web::test]
async fn test_violations_are_listed_in_response_body() {
  setup_tracing();
  let (store, state) = memory_state();
  let app = init_app!(state);

  let req = actix_test::TestRequest::post()
    .uri("/movies")
    .set_json(json!({"title": "", "genre": "", "rating": 3}))
    .to_request();
  let resp = actix_test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body: Value = actix_test::read_body_json(resp).await;
  let fields: Vec<&str> = body["violations"]
    .as_array()
    .expect("violations array")
    .iter()
    .filter_map(|v| v["field"].as_str())
    .collect();
  assert_eq!(fields, vec!["genre", "title"]);
  assert_eq!(store.movie_count(), 0);
}

#[actix_web::test]
async fn test_missing_required_field_is_bad_request() {
  setup_tracing();
  let (store, state) = memory_state();
  let app = init_app!(state);

  let req = actix_test::TestRequest::post()
    .uri("/movies")
    .set_json(json!({"title": "Dune", "genre": "Sci-Fi"}))
    .to_request();
  let resp = actix_test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = actix_test::read_body_json(resp).await;
  assert!(body["error"].is_string());
  assert_eq!(store.movie_count(), 0);
}

#[actix_web::test]
async fn test_non_numeric_id_is_bad_request() {
  setup_tracing();
  let (_store, state) = memory_state();
  let app = init_app!(state);

  let req = actix_test::TestRequest::get().uri("/movies/abc").to_request();
  let resp = actix_test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_validation_error_display_lists_fields() {
  let err = validate_movie(&MovieDto::new("", "Sci-Fi", 5)).unwrap_err();
  assert!(err.to_string().starts_with("Validation Error: title"));
}
