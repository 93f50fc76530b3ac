/**
 * Wishlist Handlers
 *
 * Embedded movie entries are edited by rewriting the whole wishlist
 * document, so adding and removing entries is atomic per wishlist.
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
use crate::shared::models::{Wishlist, WishlistInput, WishlistMovieInput};

const INVALID_ID: &str = "Invalid wishlist ID format";
const INVALID_MOVIE_ID: &str = "Invalid movie ID format";
const NOT_FOUND: &str = "Wishlist not found";

pub async fn list_wishlists(
    State(wishlists): State<Collection<Wishlist>>,
) -> Result<Json<Vec<Wishlist>>, ApiError> {
    Ok(Json(wishlists.find_all().await?))
}

pub async fn get_wishlist(
    State(wishlists): State<Collection<Wishlist>>,
    Path(id): Path<String>,
) -> Result<Json<Wishlist>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    Ok(Json(load(&wishlists, id).await?))
}

pub async fn create_wishlist(
    State(wishlists): State<Collection<Wishlist>>,
    ApiJson(input): ApiJson<WishlistInput>,
) -> Result<(StatusCode, Json<Wishlist>), ApiError> {
    let wishlist = input.into_wishlist(Uuid::new_v4())?;
    wishlists.insert(&wishlist).await?;

    tracing::info!("Wishlist created: {} ({})", wishlist.name, wishlist.id);
    Ok((StatusCode::CREATED, Json(wishlist)))
}

/// `PUT /api/wishlists/:id`; a supplied `movies` array replaces the entries
pub async fn update_wishlist(
    State(wishlists): State<Collection<Wishlist>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<WishlistInput>,
) -> Result<Json<Wishlist>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut wishlist = load(&wishlists, id).await?;

    input.apply_to(&mut wishlist)?;
    save(&wishlists, &wishlist).await?;

    tracing::info!("Wishlist updated: {}", wishlist.id);
    Ok(Json(wishlist))
}

pub async fn delete_wishlist(
    State(wishlists): State<Collection<Wishlist>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    if !wishlists.delete(id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Wishlist deleted: {}", id);
    Ok(Json(MessageResponse::new("Wishlist deleted successfully")))
}

/// `POST /api/wishlists/:id/movies`
///
/// Appends an entry (with a fresh `_id`) and returns the updated wishlist.
pub async fn add_wishlist_movie(
    State(wishlists): State<Collection<Wishlist>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<WishlistMovieInput>,
) -> Result<(StatusCode, Json<Wishlist>), ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let entry = input.into_entry()?;
    let mut wishlist = load(&wishlists, id).await?;

    tracing::info!("Adding {} to wishlist {}", entry.title, wishlist.id);
    wishlist.movies.push(entry);
    save(&wishlists, &wishlist).await?;

    Ok((StatusCode::CREATED, Json(wishlist)))
}

/// `DELETE /api/wishlists/:id/movies/:movieId`
pub async fn remove_wishlist_movie(
    State(wishlists): State<Collection<Wishlist>>,
    Path((id, movie_id)): Path<(String, String)>,
) -> Result<Json<Wishlist>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let movie_id = parse_id(&movie_id, INVALID_MOVIE_ID)?;
    let mut wishlist = load(&wishlists, id).await?;

    if !wishlist.remove_movie(movie_id) {
        return Err(ApiError::not_found("Movie not found in wishlist"));
    }
    save(&wishlists, &wishlist).await?;

    tracing::info!("Removed movie {} from wishlist {}", movie_id, wishlist.id);
    Ok(Json(wishlist))
}

async fn load(wishlists: &Collection<Wishlist>, id: Uuid) -> Result<Wishlist, ApiError> {
    wishlists
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

async fn save(wishlists: &Collection<Wishlist>, wishlist: &Wishlist) -> Result<(), ApiError> {
    if !wishlists.replace(wishlist).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }
    Ok(())
}
