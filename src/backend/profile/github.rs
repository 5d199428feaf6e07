//! GitHub API Client
//!
//! Fetches a user's five oldest-created public repositories. The JSON body
//! is passed through to the caller untouched.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::shared::config::GithubConfig;

const USER_AGENT: &str = concat!("devconnector/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum GithubError {
    /// GitHub answered with something other than 200
    #[error("GitHub returned {0}")]
    NotFound(StatusCode),

    /// Not a syntactically valid GitHub login; no request was made
    #[error("invalid GitHub username: {0}")]
    InvalidUsername(String),

    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// GitHub API client
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_base: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    /// `GET /users/{username}/repos?per_page=5&sort=created:asc`
    pub async fn latest_repos(&self, username: &str) -> Result<serde_json::Value, GithubError> {
        if !is_valid_username(username) {
            return Err(GithubError::InvalidUsername(username.to_string()));
        }

        let url = format!("{}/users/{}/repos", self.api_base, username);

        let mut query: Vec<(&str, &str)> = vec![("per_page", "5"), ("sort", "created:asc")];
        if let Some(id) = &self.client_id {
            query.push(("client_id", id.as_str()));
        }
        if let Some(secret) = &self.client_secret {
            query.push(("client_secret", secret.as_str()));
        }

        let response = self.http.get(&url).query(&query).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("GitHub returned {} for {}", status, username);
            return Err(GithubError::NotFound(status));
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

/// GitHub logins: 1-39 ASCII alphanumerics or single hyphens, not at either end
fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 39
        && !username.starts_with('-')
        && !username.ends_with('-')
        && !username.contains("--")
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("octocat"));
        assert!(is_valid_username("bradtraversy"));
        assert!(is_valid_username("a-b-c"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("-lead"));
        assert!(!is_valid_username("trail-"));
        assert!(!is_valid_username("dou--ble"));
        assert!(!is_valid_username("../etc"));
        assert!(!is_valid_username(&"a".repeat(40)));
    }

    #[tokio::test]
    async fn test_invalid_username_makes_no_request() {
        let client = GithubClient::new(&GithubConfig {
            client_id: None,
            client_secret: None,
            // unroutable; a request would fail with Transport, not InvalidUsername
            api_base: "http://127.0.0.1:9".to_string(),
        })
        .unwrap();

        let err = client.latest_repos("bad/name").await.unwrap_err();
        assert!(matches!(err, GithubError::InvalidUsername(_)));
    }
}
