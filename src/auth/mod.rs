//! Authentication Module
//!
//! This module handles user registration, login, and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - User model and credential store operations
//! ├── password.rs - bcrypt hashing and verification
//! ├── sessions.rs - JWT claims, issuance, verification
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs    - Request/response types and validation
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate fields, hash password, create user, return token
//! 2. **Login**: validate fields, verify password, return token
//! 3. **Get Me**: verify token (middleware), return user profile
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with a per-user salt before storage
//! - Tokens are HS256 JWTs with explicit per-flow TTLs
//! - Unknown email and wrong password are indistinguishable at login
//! - The password hash never appears in any response

/// User model and credential store operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, register};
pub use handlers::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
