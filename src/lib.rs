//! Lyra Server - Main Library
//!
//! Backend authentication service for the Lyra wellness app: user
//! registration, login, and profile fetch over JSON HTTP, backed by a
//! PostgreSQL user store, bcrypt password hashing, and signed bearer
//! tokens.
//!
//! # Module Structure
//!
//! - **`auth`** - Users, password hashing, session tokens, HTTP handlers
//! - **`middleware`** - Bearer-token request gate for protected routes
//! - **`routes`** - Router assembly and endpoint wiring
//! - **`server`** - Configuration, application state, app initialization
//! - **`error`** - Error taxonomy and HTTP response mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use lyra_server::server::{create_app, AppState, AuthConfig};
//!
//! # async fn example(pool: sqlx::PgPool) {
//! let state = AppState::new(
//!     pool,
//!     AuthConfig {
//!         jwt_secret: "secret".to_string(),
//!         bcrypt_cost: 10,
//!         register_token_ttl_secs: 12 * 3600,
//!         login_token_ttl_secs: 3600,
//!     },
//! );
//! let app = create_app(state);
//! // Serve app with axum
//! # }
//! ```

/// Authentication: users, passwords, tokens, handlers
pub mod auth;

/// Error taxonomy and HTTP mapping
pub mod error;

/// Request-processing middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;
