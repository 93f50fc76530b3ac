/**
 * Login Handler
 *
 * This module implements `POST /api/users/login` and `POST /api/users/logout`.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a bearer token (one hour)
 * 4. Return token and account type
 *
 * # Security
 *
 * - Unknown user, passwordless account and wrong password all return the
 *   same 401 (no user enumeration)
 * - Passwords and tokens are never logged
 */

use axum::{extract::State, Json};

use crate::backend::auth::credentials::Credentials;
use crate::backend::auth::handlers::register::non_blank;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, MessageResponse};
use crate::backend::auth::tokens::TokenIssuer;
use crate::backend::error::ApiError;
use crate::backend::extract::ApiJson;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password missing
/// * `401 Unauthorized` - invalid username or password
/// * `500 Internal Server Error` - store or token signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "accountType": "read-write"
/// }
/// ```
pub async fn login(
    State(credentials): State<Credentials>,
    State(tokens): State<TokenIssuer>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(username), Some(password)) = (non_blank(request.username), request.password) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };
    tracing::info!("Login request for: {}", username);

    let user = credentials.authenticate(&username, &password).await?;
    let token = tokens.issue(user.id, user.account_type)?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        account_type: user.account_type,
    }))
}

/// Logout handler
///
/// Tokens are stateless, so there is nothing to invalidate server-side; the
/// client discards its token.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "Logged out successfully. Clear the JWT token from local storage or cookies on the client side.",
    ))
}
