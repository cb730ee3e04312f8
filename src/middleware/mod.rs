//! Middleware Module
//!
//! Request-processing middleware. Currently one concern: the
//! authentication gate for protected routes.

pub mod auth;

pub use auth::{auth_middleware, authenticate, bearer_token, AuthUser, AuthenticatedUser};
