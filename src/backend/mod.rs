//! Backend Module
//!
//! This module contains all server-side code for the DevConnector API: the
//! Axum server, its routes and middleware, authentication, persistence and
//! the GitHub lookup proxy.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store bootstrapping
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, JWT tokens, register/login/me handlers
//! - **`profile`** - Profile upsert, experience/education, GitHub proxy
//! - **`posts`** - Posts, likes and comments
//! - **`store`** - `Store` traits with Postgres and in-memory implementations
//! - **`middleware`** - `x-auth-token` gate and validated JSON extraction
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config loading, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── profile/        - Profiles and GitHub lookup
//! ├── posts/          - Posts
//! ├── store/          - Persistence
//! ├── middleware/     - Request middleware and extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries the store handle, token keys, bcrypt cost and the
//! GitHub client. It is built once at startup and cloned into each handler;
//! nothing in it is mutated by requests.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Store, hashing and signing
//! failures bubble up with `?`, are logged when converted to a response and
//! reach the client only as a generic 500.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Profiles, experience/education and the GitHub lookup
pub mod profile;

/// Posts, likes and comments
pub mod posts;

/// Persistence traits and implementations
pub mod store;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
pub use store::{MemoryStore, PgStore, SharedStore, Store};
