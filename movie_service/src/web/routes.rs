// movie_service/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Extractor failures (bad JSON, non-numeric ids) are rendered through AppError so every
// client error shares one body shape.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Registers the `/movies` resource and the health probe on an actix `App`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/movies")
        .app_data(json_config())
        .app_data(path_config())
        .service(
          web::resource("")
            .route(web::get().to(handlers::list_movies_handler))
            .route(web::post().to(handlers::create_movie_handler)),
        )
        .service(
          web::resource("/{movie_id}")
            .route(web::get().to(handlers::get_movie_handler))
            .route(web::put().to(handlers::update_movie_handler))
            .route(web::delete().to(handlers::delete_movie_handler)),
        ),
    );
}
