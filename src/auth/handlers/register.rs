/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email format, and password length
 * 2. Check whether the email is already registered
 * 3. Hash the password
 * 4. Create the user (role defaults to "user")
 * 5. Issue a registration-lifetime token
 *
 * The duplicate-email lookup is advisory; the unique constraint in the
 * store is what decides a race between two registrations for the same
 * email, surfacing as `DuplicateEmail` from `create_user`.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{normalize_email, RegisterRequest, TokenResponse};
use crate::auth::password::hash_password;
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Register handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and auth configuration)
/// * `Json(request)` - Registration request
///
/// # Returns
///
/// `201 Created` with `{"token": ...}` on success
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or email already registered
/// * `500 Internal Server Error` - store, hashing, or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AuthError> {
    request.validate()?;

    let email = normalize_email(&request.email);
    tracing::info!("Registration request for email: {}", email);

    if get_user_by_email(&state.db_pool, &email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", email);
        return Err(AuthError::DuplicateEmail);
    }

    let password_hash = hash_password(&request.password, state.auth.bcrypt_cost)?;

    let user = create_user(
        &state.db_pool,
        request.name.trim().to_string(),
        email,
        password_hash,
        request.role_or_default(),
    )
    .await?;

    let token = create_token(
        &user,
        state.auth.register_token_ttl_secs,
        &state.auth.jwt_secret,
    )
    .map_err(AuthError::TokenSigning)?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}
