// movie_service/src/web/handlers/movie_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::dto::{validate_movie, MovieDto};
use crate::errors::AppError;
use crate::models::{Movie, User};
use crate::state::AppState;

// A dangling user reference renders without a summary rather than failing the read.
async fn resolve_owner(app_state: &AppState, movie: &Movie) -> Result<Option<User>, AppError> {
  let Some(user_id) = movie.user_id else {
    return Ok(None);
  };
  let owner = app_state.users.find_by_id(user_id).await?;
  if owner.is_none() {
    warn!(movie_id = ?movie.id, user_id, "Movie references a user that does not exist.");
  }
  Ok(owner)
}

async fn to_read_dto(app_state: &AppState, movie: &Movie) -> Result<MovieDto, AppError> {
  let owner = resolve_owner(app_state, movie).await?;
  Ok(MovieDto::from_movie(movie).with_user(owner.as_ref()))
}

#[instrument(name = "handler::list_movies", skip(app_state))]
pub async fn list_movies_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let movies = app_state.movies.find_all().await?;

  let mut body = Vec::with_capacity(movies.len());
  for movie in &movies {
    body.push(to_read_dto(&app_state, movie).await?);
  }

  info!("Listed {} movies.", body.len());
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(
  name = "handler::create_movie",
  skip(app_state, payload),
  fields(title = %payload.title, user_id = ?payload.user_id)
)]
pub async fn create_movie_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<MovieDto>,
) -> Result<HttpResponse, AppError> {
  let dto = payload.into_inner();
  validate_movie(&dto)?;

  if let Some(user_id) = dto.user_id {
    if app_state.users.find_by_id(user_id).await?.is_none() {
      warn!("Refusing to create movie for unknown user {}.", user_id);
      return Err(AppError::UnknownUser(user_id));
    }
  }

  let saved = app_state.movies.save(dto.into_new_movie()).await?;
  let id = saved
    .id
    .ok_or_else(|| AppError::Internal("Store returned a movie without an id.".to_string()))?;

  info!(movie_id = id, "Movie created.");
  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/movies/{}", id)))
      .json(MovieDto::from_movie(&saved)),
  )
}

#[instrument(name = "handler::get_movie", skip(app_state, path), fields(movie_id = %path.as_ref()))]
pub async fn get_movie_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let movie_id = path.into_inner();

  let Some(movie) = app_state.movies.find_by_id(movie_id).await? else {
    info!("Movie {} not found.", movie_id);
    return Err(AppError::NotFound);
  };

  Ok(HttpResponse::Ok().json(to_read_dto(&app_state, &movie).await?))
}

#[instrument(
  name = "handler::update_movie",
  skip(app_state, path, payload),
  fields(movie_id = %path.as_ref())
)]
pub async fn update_movie_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<MovieDto>,
) -> Result<HttpResponse, AppError> {
  let movie_id = path.into_inner();
  let dto = payload.into_inner();
  validate_movie(&dto)?;

  let Some(mut movie) = app_state.movies.find_by_id(movie_id).await? else {
    info!("Movie {} not found; nothing to update.", movie_id);
    return Err(AppError::NotFound);
  };

  if dto.user_id.is_some() && dto.user_id != movie.user_id {
    warn!("Ignoring userId on update; the owning user cannot be changed.");
  }
  dto.overwrite(&mut movie);

  let saved = app_state.movies.save(movie).await?;
  info!("Movie {} updated.", movie_id);
  Ok(HttpResponse::Ok().json(to_read_dto(&app_state, &saved).await?))
}

#[instrument(name = "handler::delete_movie", skip(app_state, path), fields(movie_id = %path.as_ref()))]
pub async fn delete_movie_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let movie_id = path.into_inner();

  let Some(movie) = app_state.movies.find_by_id(movie_id).await? else {
    info!("Movie {} not found; nothing to delete.", movie_id);
    return Err(AppError::NotFound);
  };

  app_state.movies.delete(&movie).await?;
  info!("Movie {} deleted.", movie_id);
  Ok(HttpResponse::NoContent().finish())
}
