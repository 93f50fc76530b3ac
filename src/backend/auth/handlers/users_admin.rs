//! Admin user management: `PUT /api/users/:id` and `DELETE /api/users/:id`.
//! Both routes sit behind the admin gate.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::auth::credentials::{CredentialUpdate, Credentials};
use crate::backend::auth::handlers::types::{
    MessageResponse, UpdateUserRequest, UpdateUserResponse,
};
use crate::backend::error::ApiError;
use crate::backend::extract::{parse_id, ApiJson};
use crate::backend::middleware::AuthUser;
use crate::shared::Role;

const INVALID_ID: &str = "Invalid user ID format";

pub async fn update_user(
    State(credentials): State<Credentials>,
    AuthUser(admin): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    let role = request
        .account_type
        .map(|raw| raw.parse::<Role>())
        .transpose()?;

    tracing::info!("User {} updating user {}", admin.user_id, id);

    let user = credentials
        .update_credentials(
            id,
            CredentialUpdate {
                username: request.username,
                password: request.password,
                role,
            },
        )
        .await?;

    Ok(Json(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        user: user.into(),
    }))
}

pub async fn delete_user(
    State(credentials): State<Credentials>,
    AuthUser(admin): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, INVALID_ID)?;
    tracing::info!("User {} deleting user {}", admin.user_id, id);

    credentials.delete(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
