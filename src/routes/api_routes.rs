/**
 * API Route Handlers
 *
 * Wires the authentication endpoints into the router.
 *
 * # Routes
 *
 * - `POST /api/auth/register` - User registration (public)
 * - `POST /api/auth/login` - User login (public)
 * - `GET /api/auth/me` - Current user profile (bearer token required)
 */

use axum::{middleware, Router};

use crate::auth::{get_me, login, register};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure API routes
///
/// The `/api/auth/me` route runs behind the authentication middleware,
/// which rejects the request before the handler when the bearer token is
/// missing or invalid. Register and login stay public.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, needed by the middleware layer
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route(
            "/api/auth/me",
            axum::routing::get(get_me)
                .layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
}
