//! Shared Error Types
//!
//! Validation failures raised while checking request payloads and domain
//! values. These are independent of HTTP; the backend maps them to a 400
//! response.
//!
//! # Usage
//!
//! ```rust
//! use movieshelf::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title is required");
//! ```
use thiserror::Error;

/// Validation errors shared by request payloads and domain types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field was missing or held an unacceptable value
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation error for a required field that was absent or blank
    pub fn missing(field: &str) -> Self {
        Self::validation(field, format!("{field} is required"))
    }
}

/// Returns the trimmed value if present and non-blank
pub fn require_text(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(SharedError::missing(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
        }
    }

    #[test]
    fn test_validation_display_is_message_only() {
        let error = SharedError::missing("title");
        assert_eq!(error.to_string(), "title is required");
    }

    #[test]
    fn test_require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("name", Some("  80s  ".into())).unwrap(), "80s");
        assert!(require_text("name", Some("   ".into())).is_err());
        assert!(require_text("name", None).is_err());
    }
}
