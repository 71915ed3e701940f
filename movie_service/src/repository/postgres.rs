// movie_service/src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{Movie, User};
use crate::repository::{MovieRepository, UserRepository};

const MOVIE_COLUMNS: &str = "id, title, genre, rating, user_id";

#[derive(Clone)]
pub struct PgMovieRepository {
  pool: PgPool,
}

impl PgMovieRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
  #[instrument(name = "pg_movies::find_all", skip(self))]
  async fn find_all(&self) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> = sqlx::query_as(&format!("SELECT {} FROM movies ORDER BY id ASC", MOVIE_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch movies from database: {}", e);
        AppError::Sqlx(e)
      })?;

    debug!("Fetched {} movies.", movies.len());
    Ok(movies)
  }

  #[instrument(name = "pg_movies::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
    sqlx::query_as(&format!("SELECT {} FROM movies WHERE id = $1", MOVIE_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while fetching movie {}: {}", id, e);
        AppError::Sqlx(e)
      })
  }

  #[instrument(name = "pg_movies::save", skip(self, movie), fields(movie_id = ?movie.id))]
  async fn save(&self, movie: Movie) -> Result<Movie> {
    match movie.id {
      None => {
        let inserted: Movie = sqlx::query_as(&format!(
          "INSERT INTO movies (title, genre, rating, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
          MOVIE_COLUMNS
        ))
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.rating)
        .bind(movie.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
          error!("Database error while inserting movie: {}", e);
          AppError::Sqlx(e)
        })?;

        debug!(movie_id = ?inserted.id, "Movie inserted.");
        Ok(inserted)
      }
      Some(id) => {
        let updated: Option<Movie> = sqlx::query_as(&format!(
          "UPDATE movies SET title = $2, genre = $3, rating = $4, user_id = $5 WHERE id = $1 RETURNING {}",
          MOVIE_COLUMNS
        ))
        .bind(id)
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.rating)
        .bind(movie.user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
          error!("Database error while updating movie {}: {}", id, e);
          AppError::Sqlx(e)
        })?;

        updated.ok_or_else(|| {
          warn!("Movie {} disappeared before it could be updated.", id);
          AppError::NotFound
        })
      }
    }
  }

  #[instrument(name = "pg_movies::delete", skip(self, movie), fields(movie_id = ?movie.id))]
  async fn delete(&self, movie: &Movie) -> Result<()> {
    let Some(id) = movie.id else {
      debug!("Skipping delete of a movie that was never persisted.");
      return Ok(());
    };

    let result = sqlx::query("DELETE FROM movies WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while deleting movie {}: {}", id, e);
        AppError::Sqlx(e)
      })?;

    debug!(rows_affected = result.rows_affected(), "Movie delete executed.");
    Ok(())
  }
}

#[derive(Clone)]
pub struct PgUserRepository {
  pool: PgPool,
}

impl PgUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for PgUserRepository {
  #[instrument(name = "pg_users::find_by_id", skip(self))]
  async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
    sqlx::query_as("SELECT id, name, email FROM users WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while fetching user {}: {}", id, e);
        AppError::Sqlx(e)
      })
  }
}
