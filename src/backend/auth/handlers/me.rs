/**
 * Get Current User Handler
 *
 * Handler for GET /api/auth. Runs behind the auth middleware and returns
 * the authenticated user's record without the password hash.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token (middleware)
/// * `404 Not Found` - The user was deleted after the token was issued
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "A",
///   "email": "a@x.com",
///   "avatar": "https://www.gravatar.com/avatar/...",
///   "date": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = state
        .store
        .find_user_by_id(auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.into()))
}
