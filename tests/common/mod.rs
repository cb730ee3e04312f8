//! Common test utilities and helpers
//!
//! Shared fixtures for the integration suite: the test database, test
//! user creation, and the authentication configuration the test server
//! runs with.

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use lyra_server::server::{create_app, AppState, AuthConfig};

use database::TestDatabase;

/// Signing secret used by every test server and helper token
pub const TEST_JWT_SECRET: &str = "lyra-test-secret";

/// Minimum bcrypt cost, to keep the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Authentication configuration for tests
///
/// Mirrors production defaults except for the bcrypt cost.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        bcrypt_cost: TEST_BCRYPT_COST,
        register_token_ttl_secs: 12 * 3600,
        login_token_ttl_secs: 3600,
    }
}

/// Start a test server over the given test database
pub fn create_test_server(db: &TestDatabase) -> TestServer {
    let state = AppState::new(db.pool().clone(), test_auth_config());
    TestServer::new(create_app(state)).expect("Failed to start test server")
}
