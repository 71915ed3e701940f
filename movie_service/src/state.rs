// movie_service/src/state.rs

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::db;
use crate::errors::Result;
use crate::repository::{InMemoryStore, MovieRepository, PgMovieRepository, PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
  pub movies: Arc<dyn MovieRepository>,
  pub users: Arc<dyn UserRepository>,
}

impl AppState {
  /// Picks the storage backend from `config`: PostgreSQL when `DATABASE_URL` is set,
  /// the in-memory store otherwise.
  pub async fn from_config(config: &AppConfig) -> Result<Self> {
    let Some(database_url) = config.database_url.clone() else {
      warn!("DATABASE_URL is not set; movies will be kept in memory and lost on restart.");
      let store = if config.seed_db {
        InMemoryStore::with_users(db::sample_users())
      } else {
        InMemoryStore::new()
      };
      return Ok(Self::in_memory(Arc::new(store)));
    };

    let pool = db::connect(config, &database_url).await?;
    if config.run_migrations {
      db::run_migrations(&pool).await?;
    }
    if config.seed_db {
      db::seed_users(&pool).await?;
    }

    info!("Using PostgreSQL storage backend.");
    Ok(Self {
      movies: Arc::new(PgMovieRepository::new(pool.clone())),
      users: Arc::new(PgUserRepository::new(pool)),
    })
  }

  pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
    Self {
      movies: store.clone(),
      users: store,
    }
  }
}
