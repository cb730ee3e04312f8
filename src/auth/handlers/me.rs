/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the profile of the authenticated user without the password hash.
 *
 * The route is gated by the authentication middleware: by the time this
 * handler runs, the bearer token has been verified and the decoded
 * identity attached to the request. The handler re-reads the user from
 * the store, so a token for a since-deleted account answers 404.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::AuthError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `AuthUser(identity)` - Identity attached by the authentication middleware
///
/// # Returns
///
/// `200 OK` with the user profile (no password hash)
///
/// # Errors
///
/// * `401 Unauthorized` - no identity attached (missing or invalid token)
/// * `404 Not Found` - the user record no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, AuthError> {
    let user = get_user_by_id(&state.db_pool, identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Authenticated user no longer exists: {}", identity.user_id);
            AuthError::NotFound
        })?;

    Ok(Json(UserResponse::from(user)))
}
