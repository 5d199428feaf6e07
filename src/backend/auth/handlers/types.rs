/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration, login and current-user handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::backend::auth::users::User;
use crate::backend::middleware::RequestSchema;

/// Registration request
///
/// Missing fields deserialize as empty strings so they surface as field
/// errors rather than a decode failure.
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Plain password, hashed before storage
    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

impl RequestSchema for RegisterRequest {
    const FIELDS: &'static [&'static str] = &["name", "email", "password"];
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl RequestSchema for LoginRequest {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

/// Returned by registration and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::validation::ordered_field_errors;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_errors_in_declared_order() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email": "nope"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let messages: Vec<String> = ordered_field_errors(&errors, RegisterRequest::FIELDS)
            .into_iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();

        assert_eq!(
            messages,
            vec![
                "name: Name is required".to_string(),
                "email: Please include a valid email".to_string(),
                "password: Please enter a password with 6 or more characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_valid_login() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
