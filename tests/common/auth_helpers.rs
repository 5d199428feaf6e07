//! Authentication test helpers
//!
//! Register users through the API and build the `x-auth-token` header.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through `POST /api/users` and resolve its id
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) -> TestUser {
    let response = server
        .post("/api/users")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "register failed: {}", response.text());
    let token = response.json::<Value>()["token"]
        .as_str()
        .expect("token in response")
        .to_string();

    let me: Value = server
        .get("/api/auth")
        .add_header(token_header_name(), token_header_value(&token))
        .await
        .json();
    let id = Uuid::parse_str(me["id"].as_str().expect("id in response")).expect("uuid id");

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(server: &TestServer, name: &str) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    register_user(server, name, &email, "secret1").await
}

pub fn token_header_name() -> HeaderName {
    HeaderName::from_static("x-auth-token")
}

pub fn token_header_value(token: &str) -> HeaderValue {
    HeaderValue::from_str(token).expect("token is a valid header value")
}

/// Build a profile for `user` with the minimum required fields
pub async fn create_profile(server: &TestServer, user: &TestUser, status: &str, skills: &str) -> Value {
    let response = server
        .post("/api/profile")
        .add_header(token_header_name(), token_header_value(&user.token))
        .json(&json!({ "status": status, "skills": skills }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "profile failed: {}", response.text());
    response.json()
}
