/**
 * API Error Types
 *
 * `ApiError` is the single HTTP-facing error. Every handler returns
 * `Result<_, ApiError>`; domain errors convert into it with `From` (see
 * `conversion.rs`).
 *
 * # Status Code Mapping
 *
 * - `Unauthenticated` - 401 (no identity, or an invalid token)
 * - `Forbidden` - 403 (identity present, role not allowed)
 * - `NotFound` - 404
 * - `BadRequest` - 400 (validation, malformed JSON, bad identifiers)
 * - `Internal` - 500 (detail is logged, never returned)
 * - `ServiceUnavailable` - 503 (Google sign-in not configured)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for requests without credentials
pub const NO_USER_MESSAGE: &str = "Unauthorized: No user logged in";

/// Message returned when a role is not in a route's allowed set
pub const FORBIDDEN_MESSAGE: &str = "Forbidden: You do not have access to this resource";

/// HTTP-facing error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Internal failure; the string is for logs only
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated(NO_USER_MESSAGE.to_string())
    }

    pub fn forbidden() -> Self {
        Self::Forbidden(FORBIDDEN_MESSAGE.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message safe to return to clients
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::unauthenticated().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden().status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::ServiceUnavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_internal_message_hides_detail() {
        let error = ApiError::internal("connection refused on 10.0.0.5");
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_error_message() {
        let error = ApiError::bad_request("Invalid movie ID format");
        assert_eq!(error.message(), "Invalid movie ID format");
    }
}
