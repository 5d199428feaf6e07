/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Account routes (liveness, registration, login)
 * 2. Profile routes
 * 3. Post routes
 * 4. Fallback: the built client when `server.client_dir` is set, otherwise a JSON 404
 *
 * Every request is traced by `TraceLayer`.
 */

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::post_routes::configure_post_routes;
use crate::backend::routes::profile_routes::configure_profile_routes;
use crate::backend::server::state::AppState;
use crate::shared::config::ServerConfig;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, token keys and GitHub client
/// * `server` - Listener settings; only `client_dir` is used here
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router, &app_state);
    let router = configure_profile_routes(router, &app_state);
    let router = configure_post_routes(router, &app_state);

    let router = match &server.client_dir {
        Some(dir) => {
            tracing::info!("Serving client from {}", dir);
            let index = Path::new(dir).join("index.html");
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => router.fallback(not_found),
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
