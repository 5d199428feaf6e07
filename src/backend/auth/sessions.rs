/**
 * Session Tokens
 *
 * This module handles JWT generation and validation. A token carries the
 * user id under `user.id`, is signed with HS256 using the configured secret
 * and expires `token_ttl_secs` after issue.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::MAX_TOKEN_TTL_SECS;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimsUser,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.user.id).map_err(|_| TokenError::InvalidSubject)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed, or expired
    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Signature checks out but `user.id` is not a UUID
    #[error("token subject is not a user id")]
    InvalidSubject,
}


/// Signing and verification keys derived from the JWT secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        // expiry is exact, no clock-skew grace
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs: ttl_secs.min(MAX_TOKEN_TTL_SECS),
        }
    }

    /// Create a token for `user_id`, valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, unix_now())
    }

    /// Create a token as if issued at `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        user_id: Uuid,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user: ClaimsUser {
                id: user_id.to_string(),
            },
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify signature and expiry, then decode the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(TokenError::InvalidToken)?;
        Ok(token_data.claims)
    }
}

fn unix_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
