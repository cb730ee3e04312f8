/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate email format and password presence
 * 2. Look up the user by normalized email
 * 3. Verify the password against the stored hash
 * 4. Issue a login-lifetime token
 *
 * # Security Notes
 *
 * Unknown email and wrong password produce the same `InvalidCredentials`
 * response, so the endpoint cannot be used to enumerate accounts.
 * Passwords are never logged.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{normalize_email, LoginRequest, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and auth configuration)
/// * `Json(request)` - Login request
///
/// # Returns
///
/// `200 OK` with `{"token": ...}` on success
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or invalid credentials
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    request.validate()?;

    let email = normalize_email(&request.email);
    tracing::info!("Login request for email: {}", email);

    let user = get_user_by_email(&state.db_pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown email: {}", email);
            AuthError::InvalidCredentials
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed, wrong password for: {}", email);
        return Err(AuthError::InvalidCredentials);
    }

    let token = create_token(
        &user,
        state.auth.login_token_ttl_secs,
        &state.auth.jwt_secret,
    )
    .map_err(AuthError::TokenSigning)?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    Ok(Json(TokenResponse { token }))
}
