/**
 * Server Configuration
 *
 * This module loads and validates process-wide configuration at startup.
 * Configuration is materialized once into explicit values held in
 * `AppState` and passed down to the token issuer and password hasher, so
 * tests can construct isolated configurations with their own secrets and
 * TTLs instead of reading the environment.
 *
 * # Environment Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - token signing secret (required, must be non-empty)
 * - `SERVER_PORT` - listen port (default 3000)
 * - `BCRYPT_COST` - bcrypt work factor (default 10)
 * - `JWT_REGISTER_TTL_HOURS` - TTL of tokens issued at registration (default 12)
 * - `JWT_LOGIN_TTL_HOURS` - TTL of tokens issued at login (default 1)
 *
 * A missing or empty `JWT_SECRET` is a fatal misconfiguration: startup
 * fails rather than running with an unsigned-in-practice token scheme.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default TTL for tokens issued at registration, in hours
pub const DEFAULT_REGISTER_TTL_HOURS: u64 = 12;

/// Default TTL for tokens issued at login, in hours
pub const DEFAULT_LOGIN_TTL_HOURS: u64 = 1;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `JWT_SECRET` is not set or empty
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingJwtSecret,

    /// `DATABASE_URL` is not set
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Authentication configuration shared with handlers and the request gate
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing and verification
    pub jwt_secret: String,
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
    /// Lifetime of tokens issued at registration, in seconds
    pub register_token_ttl_secs: u64,
    /// Lifetime of tokens issued at login, in seconds
    pub login_token_ttl_secs: u64,
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Authentication configuration
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `JWT_SECRET` or `DATABASE_URL` is missing.
    /// Optional variables fall back to their defaults when unset or
    /// unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let port = env_or("SERVER_PORT", DEFAULT_PORT);

        Ok(Self {
            port,
            database_url,
            auth: AuthConfig {
                jwt_secret,
                bcrypt_cost: env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST),
                register_token_ttl_secs: env_or(
                    "JWT_REGISTER_TTL_HOURS",
                    DEFAULT_REGISTER_TTL_HOURS,
                ) * 3600,
                login_token_ttl_secs: env_or("JWT_LOGIN_TTL_HOURS", DEFAULT_LOGIN_TTL_HOURS)
                    * 3600,
            },
        })
    }
}

/// Read a numeric environment variable, falling back to a default
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Connect to the database and run migrations
///
/// Unlike optional services, the user store is required: a connection or
/// migration failure propagates to `main` and aborts startup.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "JWT_SECRET",
            "DATABASE_URL",
            "SERVER_PORT",
            "BCRYPT_COST",
            "JWT_REGISTER_TTL_HOURS",
            "JWT_LOGIN_TTL_HOURS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_secret_fails_fast() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/lyra");

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingJwtSecret)));
    }

    #[test]
    #[serial]
    fn test_empty_secret_fails_fast() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/lyra");
        std::env::set_var("JWT_SECRET", "   ");

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingJwtSecret)));
    }

    #[test]
    #[serial]
    fn test_missing_database_url_fails_fast() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");

        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("DATABASE_URL", "postgres://localhost/lyra");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.auth.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(config.auth.register_token_ttl_secs, 12 * 3600);
        assert_eq!(config.auth.login_token_ttl_secs, 3600);
    }

    #[test]
    #[serial]
    fn test_explicit_ttls_override_defaults() {
        clear_env();
        std::env::set_var("JWT_SECRET", "secret");
        std::env::set_var("DATABASE_URL", "postgres://localhost/lyra");
        std::env::set_var("JWT_REGISTER_TTL_HOURS", "24");
        std::env::set_var("JWT_LOGIN_TTL_HOURS", "2");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.auth.register_token_ttl_secs, 24 * 3600);
        assert_eq!(config.auth.login_token_ttl_secs, 2 * 3600);
    }
}
