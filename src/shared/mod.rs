//! Shared Module
//!
//! Domain types and configuration used across the backend. Everything here is
//! plain data plus the pure rules that govern it (partial profile updates,
//! like/unlike, comment ownership), so it can be tested without a server or a
//! database.

/// Profile document and its experience/education entries
pub mod profile;

/// Post document with likes and comments
pub mod post;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use profile::{Education, Experience, Profile, ProfileUpdate, Social};
pub use post::{AuthorSnapshot, Comment, Like, Post, PostError};
pub use error::{FieldError, SharedError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, MAX_TOKEN_TTL_SECS};
