//! HTTP handlers and route configuration.

mod auth;
mod health;
mod movies;
mod profile;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/health", web::get().to(health::health_check))
        .route("/signup", web::post().to(auth::signup))
        .route("/login", web::post().to(auth::login))
        // Protected routes - all resolve identity through the bearer token
        .route("/profile", web::get().to(profile::get_profile))
        .route("/profile", web::put().to(profile::update_profile))
        .route("/movies", web::post().to(movies::create_movie))
        .route("/movies", web::get().to(movies::list_movies))
        .route("/movies/{id}", web::put().to(movies::update_movie))
        .route("/movies/{id}", web::delete().to(movies::delete_movie));
}
