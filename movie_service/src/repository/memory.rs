// movie_service/src/repository/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::{AppError, Result};
use crate::models::{Movie, User};
use crate::repository::{MovieRepository, UserRepository};

#[derive(Debug, Default)]
struct Tables {
  movies: BTreeMap<i64, Movie>,
  users: BTreeMap<i64, User>,
  last_movie_id: i64,
}

/// Process-local store backing both repositories.
///
/// Movie ids start at 1 and are never reused. Iteration order is ascending id,
/// matching the PostgreSQL backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
  tables: RwLock<Tables>,
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
    let store = Self::new();
    for user in users {
      store.insert_user(user);
    }
    store
  }

  /// Adds or replaces a user. Users are owned by another service, so this is only
  /// used for seeding.
  pub fn insert_user(&self, user: User) {
    debug!(user_id = user.id, "Seeding user into memory store.");
    self.tables.write().users.insert(user.id, user);
  }

  pub fn movie_count(&self) -> usize {
    self.tables.read().movies.len()
  }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
  async fn find_all(&self) -> Result<Vec<Movie>> {
    Ok(self.tables.read().movies.values().cloned().collect())
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
    Ok(self.tables.read().movies.get(&id).cloned())
  }

  async fn save(&self, mut movie: Movie) -> Result<Movie> {
    let mut tables = self.tables.write();
    match movie.id {
      None => {
        tables.last_movie_id += 1;
        let id = tables.last_movie_id;
        movie.id = Some(id);
        tables.movies.insert(id, movie.clone());
        debug!(movie_id = id, "Movie inserted into memory store.");
      }
      Some(id) => match tables.movies.get_mut(&id) {
        Some(stored) => *stored = movie.clone(),
        None => {
          warn!("Movie {} disappeared before it could be updated.", id);
          return Err(AppError::NotFound);
        }
      },
    }
    Ok(movie)
  }

  async fn delete(&self, movie: &Movie) -> Result<()> {
    if let Some(id) = movie.id {
      let removed = self.tables.write().movies.remove(&id).is_some();
      debug!(movie_id = id, removed, "Movie delete executed against memory store.");
    }
    Ok(())
  }
}

#[async_trait]
impl UserRepository for InMemoryStore {
  async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
    Ok(self.tables.read().users.get(&id).cloned())
  }
}
