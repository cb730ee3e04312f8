/**
 * Authentication Middleware
 *
 * The request gate for protected routes. The core is `authenticate`, a
 * pure function from request headers to an identity: it extracts the
 * bearer token and verifies it against the configured secret. The axum
 * middleware wraps that function, attaches the identity to the request,
 * and short-circuits with 401 before any protected handler runs.
 *
 * All verification failures (malformed token, bad signature, expiry)
 * collapse into the single `InvalidToken` error, so a caller cannot tell
 * which check failed.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Identity decoded from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Extract the bearer token from the Authorization header
///
/// # Errors
///
/// `MissingToken` when the header is absent, unreadable, or does not use
/// the `Bearer ` prefix.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)
}

/// Authenticate a request from its headers
///
/// Pure with respect to the request: extraction plus verification against
/// the given secret, no storage access. The identity is the token's claim
/// snapshot; whether the user still exists is the protected handler's
/// concern.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthenticatedUser, AuthError> {
    let token = bearer_token(headers)?;

    let claims = verify_token(token, secret).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        AuthError::InvalidToken
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("Token subject is not a valid user id");
        AuthError::InvalidToken
    })?;

    Ok(AuthenticatedUser {
        user_id,
        name: claims.name,
        email: claims.email,
        role: claims.role,
    })
}

/// Authentication middleware
///
/// 1. Runs `authenticate` on the request headers
/// 2. Attaches the resulting `AuthenticatedUser` to request extensions
/// 3. Short-circuits with 401 when authentication fails
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate(request.headers(), &state.auth.jwt_secret)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind `auth_middleware` take this as a parameter to receive
/// the identity the middleware attached. A route wired without the
/// middleware rejects with `MissingToken` rather than panicking.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::MissingToken
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::create_token;
    use crate::auth::users::User;
    use chrono::Utc;

    const SECRET: &str = "gate-test-secret";

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@x.edu".to_string(),
            password_hash: "$2b$04$irrelevant".to_string(),
            role: "user".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_bearer_token_wrong_prefix() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_authenticate_valid_token() {
        let user = sample_user();
        let token = create_token(&user, 3600, SECRET).unwrap();
        let headers = headers_with(&format!("Bearer {}", token));

        let identity = authenticate(&headers, SECRET).unwrap();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.email, "ana@x.edu");
        assert_eq!(identity.role, "user");
    }

    #[test]
    fn test_authenticate_garbage_token() {
        let headers = headers_with("Bearer not.a.jwt");
        assert!(matches!(
            authenticate(&headers, SECRET),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_authenticate_wrong_secret() {
        let token = create_token(&sample_user(), 3600, SECRET).unwrap();
        let headers = headers_with(&format!("Bearer {}", token));

        assert!(matches!(
            authenticate(&headers, "other-secret"),
            Err(AuthError::InvalidToken)
        ));
    }
}
