//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly, health route, 404 fallback
//! └── api_routes.rs - Authentication endpoint wiring
//! ```

/// Authentication endpoint wiring
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
