/**
 * Session Claims and JWT Tokens
 *
 * This module issues and verifies the signed bearer tokens that carry a
 * session claim. The claim is a snapshot of the user at issuance time:
 * later changes to the user record do not propagate into outstanding
 * tokens, which is acceptable because tokens are short-lived.
 *
 * Signing is a direct call returning a `Result`; the secret and TTL are
 * passed in by the caller rather than read from ambient state, so tests
 * can issue tokens against isolated configurations.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::users::User;

/// JWT claims structure
///
/// A snapshot of the user embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Role, defaulted to "user" at registration
    pub role: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Current Unix timestamp in seconds
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed token for a user
///
/// # Arguments
///
/// * `user` - the user whose claim snapshot the token carries
/// * `ttl_secs` - token lifetime; registration and login flows pass their
///   own configured values
/// * `secret` - process-wide signing secret
///
/// # Returns
///
/// Encoded JWT string
pub fn create_token(
    user: &User,
    ttl_secs: u64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        iat: now,
        exp: now + ttl_secs,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Fails for malformed encoding, a signature that does not match the
/// secret, or an elapsed expiry. The three checks stand together: no
/// partially trusted claims ever come out of this function.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
