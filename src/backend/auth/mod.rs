//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record, public summary and Gravatar derivation
//! - **`sessions`** - JWT generation and validation (`TokenKeys`)
//! - **`handlers`** - HTTP handlers for `/api/users` and `/api/auth`
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created → JWT returned
//! 2. **Login**: email, password → credentials verified → JWT returned
//! 3. **Current user**: `x-auth-token` verified by middleware → user returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless; there is no server-side revocation
//! - Tokens expire after `auth.token_ttl_secs` (100 hours by default)
//! - Bad credentials return one generic 400 regardless of cause

/// User data model
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenKeys};
pub use users::{User, UserSummary};
