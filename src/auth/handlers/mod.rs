//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request/response types and field validation
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - create account, return token
//! - **`login`** - POST /api/auth/login - verify credentials, return token
//! - **`get_me`** - GET /api/auth/me - return the authenticated user's profile

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
