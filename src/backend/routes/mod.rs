//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by area; each area splits its routes into a public
//! router and a private one wrapped in the auth middleware, then merges both.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation, tracing and fallback
//! ├── api_routes.rs      - Liveness, registration, login, current user
//! ├── profile_routes.rs  - Profiles, experience, education, GitHub
//! └── post_routes.rs     - Posts, likes, comments
//! ```

/// Main router creation
pub mod router;

/// Account endpoints
pub mod api_routes;

/// Profile endpoints
pub mod profile_routes;

/// Post endpoints
pub mod post_routes;

pub use router::create_router;
