//! Server Module
//!
//! Startup wiring for the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Store selection (Postgres or in-memory)
//! - **`init`** - `create_app`, which ties configuration, state and routes together
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig` is loaded by the binary (TOML + environment)
//! 2. **Store**: Postgres when `DATABASE_URL` is set, otherwise in-memory
//! 3. **State**: token keys, bcrypt cost and GitHub client go into `AppState`
//! 4. **Router**: all routes, the auth gate and request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnector::backend::create_app;
//! use devconnector::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Store selection
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with_store, StartupError};
pub use state::AppState;
