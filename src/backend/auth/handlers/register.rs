/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password (`ValidatedJson`)
 * 2. Check if the email is already registered
 * 3. Derive the Gravatar avatar and hash the password using bcrypt
 * 4. Create the user in the store
 * 5. Generate and return a JWT
 *
 * # Security
 *
 * - bcrypt generates a fresh salt per hash; the cost comes from config
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::users::{normalize_email, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Field errors, or "User already exists"
/// * `500 Internal Server Error` - Hashing, store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "A", "email": "a@x.com", "password": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let email = normalize_email(&request.email);
    tracing::info!("Register request for email: {}", email);

    if state.store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, state.bcrypt_cost)?;

    let user = User::new(request.name, &email, password_hash);
    // a concurrent registration can still win the race; the store reports it as a conflict
    state.store.insert_user(&user).await?;

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(TokenResponse { token }))
}
