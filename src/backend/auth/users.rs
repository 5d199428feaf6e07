/**
 * User Model
 *
 * This module defines the persisted user record, the public summary used
 * to populate profiles, and the avatar derivation used at registration.
 */

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::AuthorSnapshot;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique, stored lowercased)
    pub email: String,
    /// Hashed password (bcrypt, salt embedded)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Gravatar URL derived from the email
    pub avatar: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Public part of a user, embedded in profile responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

impl User {
    /// Build a new user record; `email` is normalized before storing
    pub fn new(name: String, email: &str, password_hash: String) -> Self {
        let email = normalize_email(email);
        Self {
            id: Uuid::new_v4(),
            name,
            avatar: gravatar_url(&email),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Name and avatar as they are right now, for posts and comments
    pub fn snapshot(&self) -> AuthorSnapshot {
        AuthorSnapshot {
            id: self.id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Trim and lowercase an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Gravatar URL for an email: 200px, PG-rated, "mystery man" fallback
pub fn gravatar_url(email: &str) -> String {
    let digest = Md5::digest(normalize_email(email).as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravatar_url_is_deterministic() {
        // md5("myemailaddress@example.com") from the Gravatar docs
        assert_eq!(
            gravatar_url("MyEmailAddress@example.com "),
            "https://www.gravatar.com/avatar/0bc83cb571cd1c50ba6f3e8a78ef1346?s=200&r=pg&d=mm"
        );
        assert_eq!(gravatar_url("a@x.com"), gravatar_url("A@X.COM"));
    }

    #[test]
    fn test_new_user_normalizes_email() {
        let user = User::new("A".to_string(), " A@X.com", "hash".to_string());
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.avatar, gravatar_url("a@x.com"));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("A".to_string(), "a@x.com", "secret-hash".to_string());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn test_summary_and_snapshot() {
        let user = User::new("A".to_string(), "a@x.com", "hash".to_string());
        let summary = user.summary();
        let snapshot = user.snapshot();
        assert_eq!(summary.id, user.id);
        assert_eq!(snapshot.name, "A");
        assert_eq!(snapshot.avatar, summary.avatar);
    }
}
