// movie_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // When unset the service runs against the in-memory store.
  pub database_url: Option<String>,
  pub database_max_connections: u32,

  pub run_migrations: bool,
  pub seed_db: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      database_url: None,
      database_max_connections: 5,
      run_migrations: true,
      seed_db: false,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = Self::default();
    let get_env = |var_name: &str| env::var(var_name).ok().filter(|value| !value.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = parse_or("SERVER_PORT", get_env("SERVER_PORT"), defaults.server_port)?;
    let database_url = get_env("DATABASE_URL");
    let database_max_connections = check_max_connections(parse_or(
      "DATABASE_MAX_CONNECTIONS",
      get_env("DATABASE_MAX_CONNECTIONS"),
      defaults.database_max_connections,
    )?)?;
    let run_migrations = parse_or("RUN_MIGRATIONS", get_env("RUN_MIGRATIONS"), defaults.run_migrations)?;
    let seed_db = parse_or("SEED_DB", get_env("SEED_DB"), defaults.seed_db)?;

    tracing::info!(
      server_host = %server_host,
      server_port,
      database_configured = database_url.is_some(),
      run_migrations,
      seed_db,
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      run_migrations,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_or<T>(var_name: &str, raw: Option<String>, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  match raw {
    Some(value) => value
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, value, e))),
    None => Ok(default),
  }
}

fn check_max_connections(value: u32) -> Result<u32> {
  if value == 0 {
    return Err(AppError::Config(
      "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
    ));
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_or_reads_valid_value() {
    let port: u16 = parse_or("SERVER_PORT", Some(" 9090 ".to_string()), 8080).unwrap();
    assert_eq!(port, 9090);
  }

  #[test]
  fn test_parse_or_falls_back_to_default_when_absent() {
    let port: u16 = parse_or("SERVER_PORT", None, 8080).unwrap();
    assert_eq!(port, 8080);
  }

  #[test]
  fn test_parse_or_rejects_non_numeric_port() {
    match parse_or::<u16>("SERVER_PORT", Some("eighty".to_string()), 8080) {
      Err(AppError::Config(message)) => assert!(message.contains("SERVER_PORT")),
      other => panic!("Expected AppError::Config, got {:?}", other),
    }
  }

  #[test]
  fn test_parse_or_reads_bools() {
    assert!(parse_or("SEED_DB", Some("true".to_string()), false).unwrap());
    assert!(!parse_or("RUN_MIGRATIONS", Some("false".to_string()), true).unwrap());
    assert!(matches!(
      parse_or::<bool>("SEED_DB", Some("yes".to_string()), false),
      Err(AppError::Config(_))
    ));
  }

  #[test]
  fn test_zero_max_connections_is_rejected() {
    assert!(matches!(check_max_connections(0), Err(AppError::Config(_))));
    assert_eq!(check_max_connections(5).unwrap(), 5);
  }
}
