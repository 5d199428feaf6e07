//! Profile Module
//!
//! Developer profiles: one per user, with embedded experience and education
//! lists, plus a public lookup of a user's GitHub repositories.
//!
//! # Architecture
//!
//! - **`types`** - Request/response schemas and their conversion into domain values
//! - **`handlers`** - HTTP handlers for `/api/profile`
//! - **`github`** - Minimal GitHub REST client

pub mod types;

pub mod handlers;

pub mod github;

pub use github::{GithubClient, GithubError};
pub use handlers::{
    add_education, add_experience, delete_account, delete_education, delete_experience,
    get_my_profile, get_profile_by_user, github_repos, list_profiles, upsert_profile,
};
