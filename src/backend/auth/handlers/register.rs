/**
 * Register Handler
 *
 * `POST /api/users/register` creates a local account with a bcrypt-hashed
 * password and the requested role.
 */

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;
use crate::shared::Role;

const MISSING_FIELDS: &str = "Username, password, and account type are required";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - a field is missing, the account type is unknown or
///   the username is taken
/// * `500 Internal Server Error` - hashing or storage failed
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "u1", "password": "p1", "accountType": "read-write" }
/// ```
pub async fn register(
    State(credentials): State<Credentials>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (Some(username), Some(password), Some(account_type)) = (
        non_blank(request.username),
        non_blank(request.password),
        non_blank(request.account_type),
    ) else {
        return Err(ApiError::bad_request(MISSING_FIELDS));
    };

    let role: Role = account_type.parse()?;
    tracing::info!("Register request for: {}", username);

    let user = credentials.register(username, password, role).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            id: user.id,
        }),
    ))
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
