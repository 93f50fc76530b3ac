/**
 * Error Conversion
 *
 * This module converts domain errors into `ApiError` and `ApiError` into
 * HTTP responses.
 *
 * # Response Format
 *
 * Every error response is JSON with a single field:
 * ```json
 * { "message": "Error message" }
 * ```
 */

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::google::OAuthError;
use crate::backend::error::types::ApiError;
use crate::backend::storage::StoreError;
use crate::shared::SharedError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken | AuthError::InvalidCredentials => {
                ApiError::Unauthenticated(err.to_string())
            }
            AuthError::DuplicateUsername | AuthError::Validation(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::UserNotFound => ApiError::NotFound(err.to_string()),
            AuthError::Hashing(_)
            | AuthError::Task(_)
            | AuthError::Signing(_)
            | AuthError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<OAuthError> for ApiError {
    fn from(err: OAuthError) -> Self {
        match err {
            OAuthError::NotConfigured => {
                ApiError::ServiceUnavailable("Google sign-in is not available".to_string())
            }
            OAuthError::MissingAuthState | OAuthError::CsrfMismatch | OAuthError::Provider(_) => {
                ApiError::BadRequest(err.to_string())
            }
            OAuthError::Configuration(_)
            | OAuthError::TokenExchange(_)
            | OAuthError::Profile(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Response for a panic caught by `CatchPanicLayer`
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"message":"Internal server error"}"#,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_is_message_only() {
        let response = ApiError::not_found("Movie not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Movie not found"})
        );
    }

    #[test]
    fn test_auth_error_mapping() {
        assert_eq!(
            ApiError::from(AuthError::InvalidToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::DuplicateUsername).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AuthError::UserNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials).message(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_oauth_not_configured_is_unavailable() {
        assert_eq!(
            ApiError::from(OAuthError::NotConfigured).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_panic_response_is_json_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Internal server error"})
        );
    }
}
