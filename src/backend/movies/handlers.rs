/**
 * Movie Handlers
 *
 * Each handler performs one store operation. Updates fetch the movie, apply
 * the supplied fields and replace the document; concurrent updates of the
 * same movie can overwrite each other.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::ApiError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::storage::Collection;
use crate::shared::models::{Movie, MovieInput};

const INVALID_ID: &str = "Invalid movie ID format";
const NOT_FOUND: &str = "Movie not found";

/// `GET /api/movies`
pub async fn list_movies(
    State(movies): State<Collection<Movie>>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(movies.find_all().await?))
}

/// `GET /api/movies/:id`
pub async fn get_movie(
    State(movies): State<Collection<Movie>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let movie = movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(movie))
}

/// `POST /api/movies`
///
/// # Errors
///
/// * `400 Bad Request` - a required field is missing or malformed
pub async fn create_movie(
    State(movies): State<Collection<Movie>>,
    ApiJson(input): ApiJson<MovieInput>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let movie = input.into_movie(Uuid::new_v4())?;
    movies.insert(&movie).await?;

    tracing::info!("Movie created: {} ({})", movie.title, movie.id);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `PUT /api/movies/:id`
pub async fn update_movie(
    State(movies): State<Collection<Movie>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<MovieInput>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut movie = movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    input.apply_to(&mut movie)?;
    if !movies.replace(&movie).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Movie updated: {}", movie.id);
    Ok(Json(movie))
}

/// `DELETE /api/movies/:id`
pub async fn delete_movie(
    State(movies): State<Collection<Movie>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    if !movies.delete(id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Movie deleted: {}", id);
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}
