/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Validation failures (itemized per field)
 * - Missing or invalid `x-auth-token`
 * - Unknown resources, duplicate registrations, non-owner mutations
 *
 * ## Server Errors
 *
 * Store, hashing and signing failures. Their detail is kept for logging
 * and replaced by "Server error" in the response body.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::store::StoreError;
use crate::shared::{FieldError, SharedError};

const SERVER_ERROR: &str = "Server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use devconnector::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid credentials");
/// let err = BackendError::not_found("Post not found");
/// let err = BackendError::unauthorized("Token is not valid");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request-level error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid credentials
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated, but not the owner of the resource
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Uniqueness violation (duplicate email)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// External API failure
    #[error("Upstream error: {message}")]
    UpstreamError { message: String },

    /// Unexpected failure; `message` is logged, never returned
    #[error("Internal error: {message}")]
    InternalError { message: String },

    /// Request decoding or validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Hash error: {0}")]
    HashError(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamError {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized { .. } | Self::Forbidden { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(StoreError::Conflict { .. }) => StatusCode::BAD_REQUEST,
            Self::InternalError { .. }
            | Self::StoreError(_)
            | Self::TokenError(_)
            | Self::HashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to return to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::UpstreamError { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { .. }) => "Validation failed".to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::StoreError(StoreError::Conflict { message }) => message.clone(),
            Self::InternalError { .. }
            | Self::StoreError(_)
            | Self::TokenError(_)
            | Self::HashError(_) => SERVER_ERROR.to_string(),
        }
    }

    /// Itemized field errors, empty unless this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::SharedError(err) => err.field_errors(),
            _ => &[],
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
