//! Movie catalog handlers - every operation is ownership-scoped.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use cinelog_core::domain::Movie;
use cinelog_shared::MessageResponse;
use cinelog_shared::dto::{
    CreateMovieRequest, CreateMovieResponse, MovieResponse, UpdateMovieRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::urls;

fn movie_response(state: &AppState, movie: Movie) -> MovieResponse {
    MovieResponse {
        id: movie.id,
        title: movie.title,
        year: movie.year,
        poster: urls::absolutize(&state.public_base_url, &movie.poster),
    }
}

/// POST /movies
pub async fn create_movie(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateMovieRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(title), Some(year), Some(poster)) = (
        req.title.filter(|t| !t.trim().is_empty()),
        req.year,
        req.poster.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "All fields are required (title, year, poster)".to_string(),
        ));
    };

    // Ownership is fixed here and never changes afterwards
    let movie = Movie::new(identity.user_id, title, year, poster);
    let saved = state.movies.insert(movie).await?;

    tracing::info!(movie_id = %saved.id, owner_id = %identity.user_id, "Movie added");

    Ok(HttpResponse::Created().json(CreateMovieResponse {
        message: "Movie added successfully".to_string(),
        movie: movie_response(&state, saved),
    }))
}

/// GET /movies
pub async fn list_movies(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let movies = state.movies.list_by_owner(identity.user_id).await?;

    let response: Vec<MovieResponse> = movies
        .into_iter()
        .map(|m| movie_response(&state, m))
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

/// PUT /movies/{id}
///
/// Sparse update; an omitted poster keeps the previous one. A movie that
/// does not exist and a movie owned by someone else are both 404.
pub async fn update_movie(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateMovieRequest>,
) -> AppResult<HttpResponse> {
    let movie_id = path.into_inner();
    let req = body.into_inner();

    let mut movie = state
        .movies
        .find_owned(movie_id, identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    if let Some(title) = req.title.filter(|t| !t.trim().is_empty()) {
        movie.title = title;
    }
    if let Some(year) = req.year {
        movie.year = year;
    }
    if let Some(poster) = req.poster.filter(|p| !p.is_empty()) {
        movie.poster = poster;
    }

    movie.updated_at = Utc::now();
    let updated = state.movies.update(movie).await?;

    tracing::info!(movie_id = %updated.id, "Movie updated");

    Ok(HttpResponse::Ok().json(movie_response(&state, updated)))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let movie_id = path.into_inner();

    let movie = state
        .movies
        .find_owned(movie_id, identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    state.movies.delete(movie.id).await?;

    tracing::info!(movie_id = %movie.id, "Movie deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Movie deleted successfully")))
}
