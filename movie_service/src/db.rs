// movie_service/src/db.rs

//! PostgreSQL bootstrap: pool creation, migrations, and optional seeding.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::User;

/// Users inserted when `SEED_DB=true`, so `userId` references have something to point at.
pub const SAMPLE_USERS: &[(&str, &str)] = &[
  ("Ada Lovelace", "ada@example.com"),
  ("Alan Turing", "alan@example.com"),
];

pub fn sample_users() -> Vec<User> {
  SAMPLE_USERS
    .iter()
    .zip(1_i64..)
    .map(|((name, email), id)| User {
      id,
      name: name.to_string(),
      email: email.to_string(),
    })
    .collect()
}

#[instrument(name = "db::connect", skip(config, database_url))]
pub async fn connect(config: &AppConfig, database_url: &str) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(database_url)
    .await?;
  info!("Successfully connected to the database.");
  Ok(pool)
}

#[instrument(name = "db::migrate", skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
  sqlx::migrate!("./migrations").run(pool).await?;
  info!("Database migrations applied.");
  Ok(())
}

#[instrument(name = "db::seed_users", skip(pool))]
pub async fn seed_users(pool: &PgPool) -> Result<()> {
  for (name, email) in SAMPLE_USERS {
    sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING")
      .bind(*name)
      .bind(*email)
      .execute(pool)
      .await
      .map_err(|e| {
        tracing::error!(error = %e, "Failed to seed user {}.", email);
        AppError::Sqlx(e)
      })?;
  }
  info!("Seeded {} sample users.", SAMPLE_USERS.len());
  Ok(())
}
