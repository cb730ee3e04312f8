/**
 * User Model and Database Operations
 *
 * This module defines the user record and the credential store operations
 * over the PostgreSQL pool. Emails are stored trimmed and lowercased;
 * callers normalize before lookup or insert.
 *
 * Uniqueness of email is enforced by the database constraint, not by the
 * advisory lookup handlers perform first: under concurrent registration
 * only one insert passes the constraint, and `create_user` maps that
 * violation to `DuplicateEmail`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AuthError;

/// Role assigned to users who register without one
pub const DEFAULT_ROLE: &str = "user";

/// User record as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, generated at creation)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique, normalized to lowercase)
    pub email: String,
    /// Hashed password (bcrypt), never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role, defaults to "user"
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - Normalized email address
/// * `password_hash` - Hashed password
/// * `role` - Role for the new account
///
/// # Errors
///
/// `DuplicateEmail` when the unique constraint on `email` rejects the
/// insert; any other database failure is passed through as `Database`.
pub async fn create_user(
    pool: &PgPool,
    name: String,
    email: String,
    password_hash: String,
    role: String,
) -> Result<User, AuthError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(&role)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(e) if is_unique_violation(&e) => Err(AuthError::DuplicateEmail),
        Err(e) => Err(AuthError::Database(e)),
    }
}

/// Get user by email
///
/// # Returns
///
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
///
/// # Returns
///
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Whether a sqlx error is a unique-constraint violation
fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
