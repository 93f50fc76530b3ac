use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::ApiError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::storage::Collection;
use crate::shared::models::{Contact, ContactInput};

const INVALID_ID: &str = "Invalid ID format";
const NOT_FOUND: &str = "Contact not found";

/// Body of a successful `POST /api/contacts`
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedContact {
    pub id: Uuid,
}

pub async fn list_contacts(
    State(contacts): State<Collection<Contact>>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(contacts.find_all().await?))
}

pub async fn get_contact(
    State(contacts): State<Collection<Contact>>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let contact = contacts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    Ok(Json(contact))
}

/// `POST /api/contacts`, 201 `{id}`
pub async fn create_contact(
    State(contacts): State<Collection<Contact>>,
    ApiJson(input): ApiJson<ContactInput>,
) -> Result<(StatusCode, Json<CreatedContact>), ApiError> {
    let contact = input.into_contact(Uuid::new_v4())?;
    contacts.insert(&contact).await?;

    tracing::info!("Contact created: {}", contact.id);
    Ok((StatusCode::CREATED, Json(CreatedContact { id: contact.id })))
}

/// `PUT /api/contacts/:id`, 204 on success
pub async fn update_contact(
    State(contacts): State<Collection<Contact>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<ContactInput>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let mut contact = contacts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;

    input.apply_to(&mut contact)?;
    if !contacts.replace(&contact).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Contact updated: {}", contact.id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_contact(
    State(contacts): State<Collection<Contact>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    if !contacts.delete(id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Contact deleted: {}", id);
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
