// movie_service/src/web/handlers/mod.rs

pub mod movie_handlers;

pub use movie_handlers::{
  create_movie_handler, delete_movie_handler, get_movie_handler, list_movies_handler, update_movie_handler,
};
