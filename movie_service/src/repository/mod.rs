// movie_service/src/repository/mod.rs

//! Persistence gateway for movies and users.
//!
//! Handlers only see the traits below. Two backends implement them:
//!  - `postgres`: runtime `sqlx` queries against a `PgPool`.
//!  - `memory`: a process-local store used when no database is configured, and by the tests.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Movie, User};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::{PgMovieRepository, PgUserRepository};

#[async_trait]
pub trait MovieRepository: Send + Sync {
  async fn find_all(&self) -> Result<Vec<Movie>>;

  async fn find_by_id(&self, id: i64) -> Result<Option<Movie>>;

  /// Inserts `movie` when it has no id yet, otherwise overwrites the stored row.
  ///
  /// Returns the persisted entity with its id assigned. Overwriting a row that no
  /// longer exists yields `AppError::NotFound`.
  async fn save(&self, movie: Movie) -> Result<Movie>;

  /// Removes the stored row for `movie`. Deleting an already-removed movie is a no-op.
  async fn delete(&self, movie: &Movie) -> Result<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
}
