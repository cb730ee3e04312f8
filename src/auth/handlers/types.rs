/**
 * Authentication Handler Types
 *
 * Request and response types for the authentication endpoints, plus the
 * field-level validation that runs before any handler side effect.
 * Validation reports the first failing field, in request-field order.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;
use crate::error::AuthError;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name (must be non-empty)
    pub name: String,
    /// Email address (normalized and checked before use)
    pub email: String,
    /// Plaintext password (hashed before storage, minimum 6 characters)
    pub password: String,
    /// Optional role; absent or blank means "user"
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address the account was registered with
    pub email: String,
    /// Plaintext password to verify
    pub password: String,
}

/// Token response returned by register and login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed bearer token
    pub token: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Trim and lowercase an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Structural email check: one '@', non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains(' ')
        && !local.contains(' ')
}

impl RegisterRequest {
    /// Validate registration fields, reporting the first failure
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::validation("name", "Name is required"));
        }
        if !is_valid_email(&normalize_email(&self.email)) {
            return Err(AuthError::validation(
                "email",
                "Please include a valid email",
            ));
        }
        if self.password.len() < 6 {
            return Err(AuthError::validation(
                "password",
                "Password must be 6 or more characters",
            ));
        }
        Ok(())
    }

    /// Role for the new account, defaulting blank or absent to "user"
    pub fn role_or_default(&self) -> String {
        match &self.role {
            Some(role) if !role.trim().is_empty() => role.trim().to_string(),
            _ => crate::auth::users::DEFAULT_ROLE.to_string(),
        }
    }
}

impl LoginRequest {
    /// Validate login fields, reporting the first failure
    pub fn validate(&self) -> Result<(), AuthError> {
        if !is_valid_email(&normalize_email(&self.email)) {
            return Err(AuthError::validation(
                "email",
                "Please include a valid email",
            ));
        }
        if self.password.is_empty() {
            return Err(AuthError::validation("password", "Password is required"));
        }
        Ok(())
    }
}
