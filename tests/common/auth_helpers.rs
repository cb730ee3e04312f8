//! Authentication test helpers
//!
//! Utilities for creating test users and tokens directly against the
//! store, bypassing the HTTP surface where a test needs a preexisting
//! account.

use sqlx::PgPool;
use uuid::Uuid;

use lyra_server::auth::password::hash_password;
use lyra_server::auth::sessions::create_token;
use lyra_server::auth::users::{create_user, User};

use super::{TEST_BCRYPT_COST, TEST_JWT_SECRET};

/// Test user credentials
pub struct TestUser {
    pub user: User,
    pub password: String,
    pub token: String,
}

/// Generate an email no other test will use
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4().simple())
}

/// Create a test user in the database with a valid login-lifetime token
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = hash_password(password, TEST_BCRYPT_COST)?;

    let user = create_user(
        pool,
        name.to_string(),
        email.to_string(),
        password_hash,
        "user".to_string(),
    )
    .await?;

    let token = create_token(&user, 3600, TEST_JWT_SECRET)?;

    Ok(TestUser {
        user,
        password: password.to_string(),
        token,
    })
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
