/**
 * Server Initialization
 *
 * Builds the store, the application state and the router from an
 * `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Load the store (Postgres or in-memory)
 * 2. Build token keys and the GitHub client into `AppState`
 * 3. Create and configure the router
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::SharedStore;
use crate::shared::AppConfig;

/// Failures that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// A configured but unreachable database, or an HTTP client that cannot
/// be built.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing DevConnector backend server");

    let store = load_store(&config.database).await?;
    create_app_with_store(store, config)
}

/// Create the application around an existing store
pub fn create_app_with_store(
    store: SharedStore,
    config: &AppConfig,
) -> Result<Router<()>, StartupError> {
    let app_state = AppState::new(store, config)?;
    let app = create_router(app_state, &config.server);

    tracing::info!("Router configured");

    Ok(app)
}
