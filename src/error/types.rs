/**
 * Authentication Error Types
 *
 * This module defines the error type used across handlers, the request
 * gate, and the credential store. Variants are grouped into errors the
 * caller can act on (validation, duplicates, bad credentials, bad tokens)
 * and internal failures that surface as a generic server error.
 */

use thiserror::Error;

/// Errors produced by the authentication service
///
/// Client-caused variants carry the message returned to the caller.
/// Internal variants wrap the underlying library error; the client never
/// sees that detail, only a generic message (see `conversion`).
#[derive(Debug, Error)]
pub enum AuthError {
    /// A request field failed validation
    ///
    /// `field` names the first failing field, `message` is the rule it broke.
    #[error("{message}")]
    Validation {
        /// Name of the first failing field
        field: &'static str,
        /// Human-readable rule description
        message: String,
    },

    /// Registration attempted with an email that already has an account
    #[error("User already exists with this email")]
    DuplicateEmail,

    /// Login failed
    ///
    /// Unknown email and wrong password both map here so the response does
    /// not reveal which of the two it was.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authorization header absent or not a bearer token
    #[error("No token, authorization denied")]
    MissingToken,

    /// Bearer token malformed, wrongly signed, or expired
    #[error("Token is not valid")]
    InvalidToken,

    /// The authenticated user no longer exists
    #[error("User not found")]
    NotFound,

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    ///
    /// Only issuance failures land here. Verification failures are mapped
    /// to `InvalidToken` at the request gate.
    #[error("Token signing error: {0}")]
    TokenSigning(jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether this error was caused by the client
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::Database(_) | Self::Hash(_) | Self::TokenSigning(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_carries_message() {
        let err = AuthError::validation("email", "Please include a valid email");
        assert_eq!(err.to_string(), "Please include a valid email");
        match err {
            AuthError::Validation { field, .. } => assert_eq!(field, "email"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AuthError::DuplicateEmail.is_client_error());
        assert!(AuthError::InvalidCredentials.is_client_error());
        assert!(AuthError::MissingToken.is_client_error());
        assert!(AuthError::InvalidToken.is_client_error());
        assert!(AuthError::NotFound.is_client_error());
        assert!(!AuthError::Database(sqlx::Error::RowNotFound).is_client_error());
    }
}
