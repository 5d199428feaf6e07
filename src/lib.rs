//! DevConnector - Main Library
//!
//! DevConnector is a small developer social network backend built with Axum:
//! users register and log in with JWT tokens, maintain a profile with
//! experience and education entries, and write posts that other developers
//! can like and comment on.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types and configuration
//!   - Profiles with experience/education sub-collections
//!   - Posts with likes and comments
//!   - Validation error types
//!   - `AppConfig` loading (TOML file + environment)
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, router and middleware
//!   - Token issuing/verification and the `x-auth-token` auth gate
//!   - Persistence behind the `Store` traits (Postgres or in-memory)
//!   - GitHub repository lookup proxy
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnector::backend::server::create_app;
//! use devconnector::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Every request loads, mutates and persists its own document. There is no
//! in-process shared mutable state beyond the store handle, and concurrent
//! writers to the same post or profile may overwrite each other's changes.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
