//! Request extractors shared by the resource handlers

use axum::extract::FromRequest;
use uuid::Uuid;

use crate::backend::error::ApiError;

/// `axum::Json` whose rejection is an `ApiError::BadRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Parse a path identifier, answering 400 with `message` when malformed
pub fn parse_id(raw: &str, message: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "bad").unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage_with_given_message() {
        let err = parse_id("not-a-uuid", "Invalid movie ID format").unwrap_err();
        assert_eq!(err.message(), "Invalid movie ID format");
    }
}
