/**
 * Router Configuration
 *
 * This module assembles the complete Axum router: the health-check root,
 * the authentication API routes, a permissive CORS layer for the mobile
 * client, and a JSON 404 fallback for unknown routes.
 */

use axum::{http::StatusCode, response::Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the application router
///
/// # Routes
///
/// - `GET /` - health check
/// - `POST /api/auth/register`, `POST /api/auth/login`, `GET /api/auth/me`
/// - anything else answers 404 with a generic JSON body
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/", axum::routing::get(health_check));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(endpoint_not_found)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Health-check handler for the root route
async fn health_check() -> &'static str {
    "API is running"
}

/// Fallback handler for unknown routes
async fn endpoint_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Endpoint not found" })),
    )
}
