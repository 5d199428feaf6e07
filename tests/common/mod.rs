//! Common test utilities and helpers
//!
//! Each integration test builds the full router on a fresh `MemoryStore`,
//! so tests are independent and need no database.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod auth_helpers;
pub mod mock_server;

pub use auth_helpers::*;
pub use mock_server::*;

use axum_test::TestServer;
use devconnector::backend::server::create_app_with_store;
use devconnector::backend::{MemoryStore, SharedStore};
use devconnector::shared::AppConfig;
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Config with a fixed secret and the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test config is valid")
}

/// Server on a fresh in-memory store
pub fn create_test_server() -> TestServer {
    create_test_server_with(test_config(), Arc::new(MemoryStore::new()))
}

pub fn create_test_server_with(config: AppConfig, store: SharedStore) -> TestServer {
    let app = create_app_with_store(store, &config).expect("failed to build app");
    TestServer::new(app).expect("failed to start test server")
}
