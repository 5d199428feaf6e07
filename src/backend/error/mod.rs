//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, domain errors)
//!
//! # Error Types
//!
//! | Variant | Status |
//! |---|---|
//! | `SharedError` (validation) | 400, with itemized `errors` |
//! | `HandlerError` | the carried status (e.g. 400 bad credentials) |
//! | `Unauthorized` | 401 |
//! | `Forbidden` | 401 (non-owner mutation) |
//! | `NotFound` | 404 |
//! | `Conflict` | 400 |
//! | `UpstreamError` | 502 |
//! | `InternalError`, `StoreError`, `TokenError`, `HashError` | 500, no detail |
//!
//! # Response Format
//!
//! ```json
//! { "error": "Post not found", "status": 404 }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
