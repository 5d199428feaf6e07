//! Store Module
//!
//! Persistence behind three repository traits. Handlers only see
//! [`SharedStore`], an `Arc<dyn Store>` built at startup and carried in
//! `AppState`.
//!
//! # Implementations
//!
//! - **`PgStore`** - Postgres via sqlx; embedded collections live in JSONB columns
//! - **`MemoryStore`** - `HashMap`s behind a mutex, used without `DATABASE_URL` and in tests
//!
//! # Consistency
//!
//! Writes replace a whole document (user, profile or post). There is no
//! compare-and-swap, so two concurrent read-modify-write cycles on the same
//! document can lose one update.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{User, UserSummary};
use crate::shared::{Post, Profile};

/// In-memory implementation
pub mod memory;

/// Postgres implementation
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated
    #[error("{message}")]
    Conflict { message: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `Conflict` when the email is taken
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Name and avatar for each existing id; unknown ids are skipped
    async fn find_user_summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, StoreError>;

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError>;

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    /// Insert or replace the profile owned by `profile.user`
    async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    async fn delete_profile_by_user(&self, user: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert or replace the post with `post.id`
    async fn save_post(&self, post: &Post) -> Result<(), StoreError>;

    /// Returns whether a post was removed
    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn delete_posts_by_user(&self, user: Uuid) -> Result<u64, StoreError>;
}

/// Everything the handlers need from persistence
pub trait Store: UserRepository + ProfileRepository + PostRepository {}

impl<T> Store for T where T: UserRepository + ProfileRepository + PostRepository {}

/// Store handle shared by all handlers
pub type SharedStore = Arc<dyn Store>;
