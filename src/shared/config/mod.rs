//! Application configuration module
//!
//! Configuration is read from an optional TOML file and then overridden by
//! environment variables. The file path comes from `DEVCONNECTOR_CONFIG`
//! (default `config/default.toml`); a missing file is not an error.
//!
//! | Key | Environment | Default |
//! |---|---|---|
//! | `server.port` | `PORT` | 5000 |
//! | `server.client_dir` | `CLIENT_DIR` | unset |
//! | `database.url` | `DATABASE_URL` | unset (in-memory store) |
//! | `auth.jwt_secret` | `JWT_SECRET` | required |
//! | `auth.token_ttl_secs` | `TOKEN_TTL_SECS` | 360000 |
//! | `auth.bcrypt_cost` | `BCRYPT_COST` | 10 |
//! | `github.client_id` | `GITHUB_CLIENT_ID` | unset |
//! | `github.client_secret` | `GITHUB_SECRET` | unset |
//! | `github.api_base` | `GITHUB_API_BASE` | `https://api.github.com` |

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_PATH_VAR: &str = "DEVCONNECTOR_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub github: GithubConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Built client bundle served for unmatched routes
    pub client_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            client_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection string; `None` selects the in-memory store
    pub url: Option<String>,
}

/// Longest accepted `auth.token_ttl_secs`, ten years
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Token and password hashing settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_secs: 360_000,
            bcrypt_cost: 10,
        }
    }
}

/// Credentials and endpoint for the GitHub repository lookup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_base: "https://api.github.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the config file and process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let config = Self::from_file(&path)?.with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file, falling back to defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_value("PORT", &port)?;
        }
        if let Some(dir) = lookup("CLIENT_DIR").filter(|v| !v.is_empty()) {
            self.server.client_dir = Some(dir);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            self.auth.token_ttl_secs = parse_value("TOKEN_TTL_SECS", &ttl)?;
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.auth.bcrypt_cost = parse_value("BCRYPT_COST", &cost)?;
        }
        if let Some(id) = lookup("GITHUB_CLIENT_ID").filter(|v| !v.is_empty()) {
            self.github.client_id = Some(id);
        }
        if let Some(secret) = lookup("GITHUB_SECRET").filter(|v| !v.is_empty()) {
            self.github.client_secret = Some(secret);
        }
        if let Some(base) = lookup("GITHUB_API_BASE") {
            self.github.api_base = base;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("auth.jwt_secret"));
        }
        if self.auth.token_ttl_secs == 0 || self.auth.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                key: "auth.token_ttl_secs",
                value: self.auth.token_ttl_secs.to_string(),
            });
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "auth.bcrypt_cost",
                value: self.auth.bcrypt_cost.to_string(),
            });
        }
        if !self.github.api_base.starts_with("http://") && !self.github.api_base.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(self.github.api_base.clone()));
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn client_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.server.client_dir = Some(dir.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database.url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.auth.jwt_secret = secret.into();
        self
    }

    pub fn token_ttl_secs(mut self, ttl: u64) -> Self {
        self.config.auth.token_ttl_secs = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.auth.bcrypt_cost = cost;
        self
    }

    pub fn github_api_base(mut self, base: impl Into<String>) -> Self {
        self.config.github.api_base = base.into();
        self
    }

    pub fn github_credentials(mut self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        self.config.github.client_id = Some(client_id.into());
        self.config.github.client_secret = Some(client_secret.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.auth.token_ttl_secs, 360_000);
        assert_eq!(config.auth.bcrypt_cost, 10);
        assert!(config.database.url.is_none());
        assert_eq!(config.github.api_base, "https://api.github.com");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue("auth.jwt_secret")));
    }

    #[test]
    fn test_toml_then_env_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            port = 8080

            [auth]
            jwt_secret = "from-file"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.bcrypt_cost, 10);

        let env: HashMap<&str, &str> = [("PORT", "6000"), ("JWT_SECRET", "from-env"), ("GITHUB_SECRET", "s3cret")]
            .into_iter()
            .collect();
        let config = config.with_env(|key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.server.port, 6000);
        assert_eq!(config.auth.jwt_secret, "from-env");
        assert_eq!(config.github.client_secret.as_deref(), Some("s3cret"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_env_number() {
        let err = AppConfig::default()
            .with_env(|key| (key == "PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn test_builder_validates() {
        let config = AppConfig::builder().jwt_secret("secret").bcrypt_cost(4).build().unwrap();
        assert_eq!(config.auth.bcrypt_cost, 4);

        let err = AppConfig::builder().jwt_secret("secret").bcrypt_cost(2).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "auth.bcrypt_cost", .. }));

        let err = AppConfig::builder().jwt_secret("secret").github_api_base("ftp://x").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_token_ttl_bounds() {
        let config = AppConfig::builder()
            .jwt_secret("secret")
            .token_ttl_secs(MAX_TOKEN_TTL_SECS)
            .build()
            .unwrap();
        assert_eq!(config.auth.token_ttl_secs, MAX_TOKEN_TTL_SECS);

        for ttl in [0, MAX_TOKEN_TTL_SECS + 1, u64::MAX] {
            let err = AppConfig::builder().jwt_secret("secret").token_ttl_secs(ttl).build().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { key: "auth.token_ttl_secs", .. }));
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::from_file(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
