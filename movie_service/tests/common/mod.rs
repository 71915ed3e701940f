// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use std::sync::Arc;

use movie_service::models::User;
use movie_service::repository::InMemoryStore;
use movie_service::state::AppState;
use once_cell::sync::Lazy;
use tracing::Level;

pub const KNOWN_USER_ID: i64 = 1;
pub const UNKNOWN_USER_ID: i64 = 999;

pub fn known_user() -> User {
  User {
    id: KNOWN_USER_ID,
    name: "Ada Lovelace".to_string(),
    email: "ada@example.com".to_string(),
  }
}

/// Memory-backed state with a single known user, plus the store handle for assertions.
pub fn memory_state() -> (Arc<InMemoryStore>, AppState) {
  let store = Arc::new(InMemoryStore::with_users([known_user()]));
  let state = AppState::in_memory(store.clone());
  (store, state)
}

/// Builds the full actix service around `$state`.
#[allow(unused_macros)]
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state.clone()))
        .configure(movie_service::web::configure_app_routes),
    )
    .await
  };
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
