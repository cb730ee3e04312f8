/**
 * Server Initialization
 *
 * This module assembles the Axum application from prepared state. The
 * entry point in `main.rs` loads configuration, connects the database,
 * and hands the resulting `AppState` to `create_app`; tests construct
 * their own state with an isolated secret and database and call the same
 * function, so the router under test is the router in production.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `state` - application state (database pool and auth configuration)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(state: AppState) -> Router {
    tracing::info!("Initializing lyra-server router");
    create_router(state)
}
