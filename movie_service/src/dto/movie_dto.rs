// movie_service/src/dto/movie_dto.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::validation::not_blank;
use crate::models::{Movie, User};

/// Public view of a user, embedded in movie responses on read paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
  pub id: i64,
  pub name: String,
  pub email: String,
}

impl From<&User> for UserSummary {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      name: user.name.clone(),
      email: user.email.clone(),
    }
  }
}

/// Wire representation of a movie.
///
/// On input, `id` and `user` are ignored; `userId` is only honored on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,

  #[validate(custom(function = "not_blank", message = "Title is mandatory"))]
  pub title: String,

  #[validate(custom(function = "not_blank", message = "Genre is mandatory"))]
  pub genre: String,

  #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
  pub rating: i64,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_id: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<UserSummary>,
}

impl MovieDto {
  pub fn new(title: impl Into<String>, genre: impl Into<String>, rating: i64) -> Self {
    Self {
      id: None,
      title: title.into(),
      genre: genre.into(),
      rating,
      user_id: None,
      user: None,
    }
  }

  /// Maps an entity to its wire shape without the embedded user summary.
  pub fn from_movie(movie: &Movie) -> Self {
    Self {
      id: movie.id,
      title: movie.title.clone(),
      genre: movie.genre.clone(),
      rating: movie.rating,
      user_id: movie.user_id,
      user: None,
    }
  }

  pub fn with_user(mut self, user: Option<&User>) -> Self {
    self.user = user.map(UserSummary::from);
    self
  }

  /// Builds a not-yet-persisted entity. Any client-supplied `id` is dropped.
  pub fn into_new_movie(self) -> Movie {
    Movie::new(self.title, self.genre, self.rating).with_user(self.user_id)
  }

  /// Overwrites the mutable scalar fields of `movie`. The user association is left alone.
  pub fn overwrite(&self, movie: &mut Movie) {
    movie.title = self.title.clone();
    movie.genre = self.genre.clone();
    movie.rating = self.rating;
  }
}
