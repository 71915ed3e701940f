// movie_service/src/dto/mod.rs

//! Request and response bodies for the `/movies` resource.
//!
//! These shapes are kept apart from `crate::models` so the wire format can
//! evolve without touching the stored entities.

pub mod movie_dto;
pub mod validation;

pub use movie_dto::{MovieDto, UserSummary};
pub use validation::{validate_movie, Violation};
