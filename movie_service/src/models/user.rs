// movie_service/src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Managed elsewhere; this service only reads users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
  pub id: i64,
  pub name: String,
  pub email: String,
}
