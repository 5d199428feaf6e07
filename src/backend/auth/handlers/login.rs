/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/auth.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 400 "Invalid credentials"
 * - Password verification is done by bcrypt against the stored hash
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::users::normalize_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Field errors, or "Invalid credentials"
/// * `500 Internal Server Error` - Store, hash or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "secret1" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let user = state.store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        BackendError::handler(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS)
    })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::handler(StatusCode::BAD_REQUEST, INVALID_CREDENTIALS));
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {}", user.id);

    Ok(Json(TokenResponse { token }))
}
