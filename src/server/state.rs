/**
 * Application State Management
 *
 * This module defines the state shared by all request handlers. The
 * service is stateless per request: the only shared resources are the
 * database pool (internally synchronized, cheap to clone) and the
 * immutable authentication configuration.
 */

use sqlx::PgPool;

use crate::server::config::AuthConfig;

/// Application state cloned into every handler
///
/// # Fields
///
/// * `db_pool` - PostgreSQL connection pool (the user store)
/// * `auth` - signing secret, bcrypt cost, and token TTLs fixed at startup
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth: AuthConfig,
}

impl AppState {
    /// Create application state from an established pool and configuration
    pub fn new(db_pool: PgPool, auth: AuthConfig) -> Self {
        Self { db_pool, auth }
    }
}
