/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It reads the JWT from the `x-auth-token` header,
 * verifies it, and attaches the user id to the request for handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "x-auth-token";

const NO_TOKEN: &str = "No token, authorization denied";
const INVALID_TOKEN: &str = "Token is not valid";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the token from `x-auth-token`
/// 2. Verifies signature and expiry
/// 3. Attaches [`AuthenticatedUser`] to request extensions
///
/// Returns 401 "No token, authorization denied" when the header is absent
/// and 401 "Token is not valid" for anything that fails verification.
/// The user's existence is not checked here; handlers that load the user
/// answer 404 themselves.
pub async fn auth_middleware(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .ok_or_else(|| {
            tracing::debug!("Missing {} header", TOKEN_HEADER);
            BackendError::unauthorized(NO_TOKEN)
        })?
        .to_str()
        .map_err(|_| BackendError::unauthorized(INVALID_TOKEN))?;

    let user_id = keys
        .verify(token)
        .and_then(|claims| claims.user_id())
        .map_err(|e| {
            tracing::warn!("Rejected token: {}", e);
            BackendError::unauthorized(INVALID_TOKEN)
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only meaningful behind [`auth_middleware`]; on an unprotected route it
/// rejects with the same 401 the middleware would.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(NO_TOKEN)
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderName, HeaderValue, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use axum_test::TestServer;

    async fn whoami(AuthUser(user): AuthUser) -> String {
        user.user_id.to_string()
    }

    fn server(keys: TokenKeys) -> TestServer {
        let app = Router::new()
            .route("/private", get(whoami))
            .route_layer(from_fn_with_state(keys.clone(), auth_middleware))
            .with_state(keys);
        TestServer::new(app).unwrap()
    }

    fn token_header(token: &str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(TOKEN_HEADER),
            HeaderValue::from_str(token).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let keys = TokenKeys::new("secret", 3600);
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id).unwrap();
        let server = server(keys);

        let (name, value) = token_header(&token);
        let response = server.get("/private").add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), user_id.to_string());
    }

    #[tokio::test]
    async fn test_missing_token() {
        let server = server(TokenKeys::new("secret", 3600));

        let response = server.get("/private").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], NO_TOKEN);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let token = TokenKeys::new("other", 3600).issue(Uuid::new_v4()).unwrap();
        let server = server(TokenKeys::new("secret", 3600));

        let (name, value) = token_header(&token);
        let response = server.get("/private").add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], INVALID_TOKEN);
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let server = server(TokenKeys::new("secret", 3600));

        let (name, value) = token_header("not-a-jwt");
        let response = server.get("/private").add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware() {
        let app = Router::new().route("/open", get(whoami));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/open").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}
