// movie_service/src/models/mod.rs

//! Contains data structures representing database entities.

pub mod movie;
pub mod user;

pub use movie::Movie;
pub use user::User;
