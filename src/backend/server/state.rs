/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and cloned into every handler:
 * - the store handle (`Arc<dyn Store>`)
 * - token signing/verification keys
 * - the bcrypt cost
 * - the GitHub client
 *
 * Nothing in it is mutable; all per-request data lives in the store.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use devconnector::backend::AppState;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let posts = state.store.list_posts().await;
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::profile::github::GithubClient;
use crate::backend::store::SharedStore;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence for users, profiles and posts
    pub store: SharedStore,

    /// JWT keys and lifetime
    pub tokens: TokenKeys,

    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,

    /// Client for the GitHub repository lookup
    pub github: GithubClient,
}

impl AppState {
    pub fn new(store: SharedStore, config: &AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            store,
            tokens: TokenKeys::new(&config.auth.jwt_secret, config.auth.token_ttl_secs),
            bcrypt_cost: config.auth.bcrypt_cost,
            github: GithubClient::new(&config.github)?,
        })
    }
}

/// Lets the auth middleware take `State<TokenKeys>`
impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
