// movie_service/src/models/movie.rs

use serde::Serialize;
use sqlx::FromRow;

/// A catalog entry.
///
/// `id` is `None` until the store assigns one on first save. The owning user is
/// held by key only and resolved through a `UserRepository` when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Movie {
  pub id: Option<i64>,
  pub title: String,
  pub genre: String,
  pub rating: i64,
  pub user_id: Option<i64>,
}

impl Movie {
  pub fn new(title: impl Into<String>, genre: impl Into<String>, rating: i64) -> Self {
    Self {
      id: None,
      title: title.into(),
      genre: genre.into(),
      rating,
      user_id: None,
    }
  }

  pub fn with_user(mut self, user_id: Option<i64>) -> Self {
    self.user_id = user_id;
    self
  }
}
