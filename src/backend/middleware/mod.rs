//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - `x-auth-token` gate for private routes and the `AuthUser` extractor
//! - **`validation`** - `ValidatedJson<T>` body extractor and date helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use devconnector::backend::middleware::auth_middleware;
//!
//! let private = private_routes.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub mod validation;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser, TOKEN_HEADER};
pub use validation::{parse_date, validate_date, RequestSchema, ValidatedJson};
