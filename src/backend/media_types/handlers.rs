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
use crate::shared::models::{MediaType, MediaTypeInput};

const INVALID_ID: &str = "Invalid media type ID format";
const NOT_FOUND: &str = "Media type not found";

pub async fn list_media_types(
    State(media_types): State<Collection<MediaType>>,
) -> Result<Json<Vec<MediaType>>, ApiError> {
    Ok(Json(media_types.find_all().await?))
}

pub async fn get_media_type(
    State(media_types): State<Collection<MediaType>>,
    Path(id): Path<String>,
) -> Result<Json<MediaType>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let media = media_types
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(media))
}

/// `POST /api/media-types`; 400 if the name is already used
pub async fn create_media_type(
    State(media_types): State<Collection<MediaType>>,
    ApiJson(input): ApiJson<MediaTypeInput>,
) -> Result<(StatusCode, Json<MediaType>), ApiError> {
    let media = input.into_media_type(Uuid::new_v4())?;
    ensure_unique_name(&media_types, &media).await?;

    media_types.insert(&media).await?;
    tracing::info!("Media type created: {}", media.media_type);
    Ok((StatusCode::CREATED, Json(media)))
}

pub async fn update_media_type(
    State(media_types): State<Collection<MediaType>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<MediaTypeInput>,
) -> Result<Json<MediaType>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut media = media_types
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    input.apply_to(&mut media)?;
    ensure_unique_name(&media_types, &media).await?;

    if !media_types.replace(&media).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }
    tracing::info!("Media type updated: {}", media.id);
    Ok(Json(media))
}

pub async fn delete_media_type(
    State(media_types): State<Collection<MediaType>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    if !media_types.delete(id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Media type deleted: {}", id);
    Ok(Json(MessageResponse::new("Media type deleted successfully")))
}

async fn ensure_unique_name(
    media_types: &Collection<MediaType>,
    media: &MediaType,
) -> Result<(), ApiError> {
    match media_types.find_one_by("mediaType", &media.media_type).await? {
        Some(existing) if existing.id != media.id => Err(ApiError::bad_request(format!(
            "Media type \"{}\" already exists",
            media.media_type
        ))),
        _ => Ok(()),
    }
}
