/**
 * Server Configuration
 *
 * Builds the store selected by `DatabaseConfig`.
 *
 * # Store Selection
 *
 * - `database.url` set: connect to Postgres and apply migrations
 * - unset: fall back to the in-memory store, with a warning, so the server
 *   can run locally without a database
 *
 * A configured database that cannot be reached is a startup error.
 */

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::backend::store::{MemoryStore, PgStore, SharedStore};
use crate::shared::config::DatabaseConfig;

const MAX_CONNECTIONS: u32 = 10;

/// Load the store described by `config`
///
/// Migration failures are logged and startup continues, since the schema
/// may already be in place.
pub async fn load_store(config: &DatabaseConfig) -> Result<SharedStore, sqlx::Error> {
    let database_url = match &config.url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data is lost on restart.");
            return Ok(Arc::new(MemoryStore::new()));
        }
    };

    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {}", e);
            e
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Arc::new(PgStore::new(pool)))
}
