//! Shared Error Types
//!
//! Errors raised while turning a request body into a typed, validated value.
//! They are independent of HTTP; the backend maps them onto status codes.
//!
//! # Error Categories
//!
//! - `SerializationError` - the body could not be decoded as the expected JSON
//! - `ValidationError` - the body decoded but one or more fields broke a rule
//!
//! # Usage
//!
//! ```rust
//! use devconnector::shared::error::{FieldError, SharedError};
//!
//! let error = SharedError::validation(vec![
//!     FieldError::new("email", "Please include a valid email"),
//! ]);
//! ```
use serde::Serialize;
use thiserror::Error;

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Request field the rule applies to
    pub field: String,
    /// Human-readable explanation
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Shared error types for request decoding and validation
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// One entry per failing rule, in field declaration order
    #[error("Validation failed: {} field error(s)", errors.len())]
    ValidationError {
        errors: Vec<FieldError>,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error from itemized field errors
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::ValidationError { errors }
    }

    /// Shortcut for a validation error on a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::validation(vec![FieldError::new(field, message)])
    }

    /// Field errors carried by this error, empty for non-validation errors
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::ValidationError { errors } => errors,
            Self::SerializationError { .. } => &[],
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_order() {
        let error = SharedError::validation(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("email", "Please include a valid email"),
        ]);
        let fields: Vec<&str> = error.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email"]);
    }

    #[test]
    fn test_single_field_error() {
        let error = SharedError::field("from", "Invalid date");
        assert_eq!(error.field_errors(), &[FieldError::new("from", "Invalid date")]);
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::serialization("Test error");
        let display = format!("{}", error);
        assert!(display.contains("Serialization error"));
        assert!(display.contains("Test error"));

        let error = SharedError::field("text", "Text is required");
        assert_eq!(error.to_string(), "Validation failed: 1 field error(s)");
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        match shared_error {
            SharedError::SerializationError { .. } => {}
            _ => panic!("Expected SerializationError from serde error"),
        }
        assert!(shared_error.field_errors().is_empty());
    }
}
