//! Authentication Handlers
//!
//! HTTP handlers for the auth endpoints.
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request/response types
//! ├── register.rs - POST /api/auth/register
//! ├── login.rs    - POST /api/auth/login
//! └── me.rs       - GET /api/auth/me
//! ```

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

/// Registration handler
pub mod register;

/// Request/response types
pub mod types;

pub use login::login;
pub use me::me;
pub use register::register;
