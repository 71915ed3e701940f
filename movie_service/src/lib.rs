// movie_service/src/lib.rs

//! Movie catalog service: a CRUD REST API over movies, each optionally
//! referencing the user who added it.
//!
//! Layers, leaf-first:
//!  - `models`: persisted entities (`Movie`, `User`).
//!  - `dto`: the wire shape (`MovieDto`, `UserSummary`) and its validation.
//!  - `repository`: the persistence gateway traits and their PostgreSQL and in-memory backends.
//!  - `web`: actix-web handlers and route configuration mounted under `/movies`.

pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod models;
pub mod repository;
pub mod state;
pub mod web;

pub use crate::errors::{AppError, Result};
