//! Error Module
//!
//! Defines the error taxonomy used across handlers and its conversion to
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - malformed or missing input (400, with a message)
//! - `Authentication` - any credential or token failure (401, always the
//!   same opaque body so callers cannot tell which check failed)
//! - `NotFound` - referenced entity absent (404)
//! - `Conflict` - uniqueness violation, e.g. duplicate email or alias (409)
//! - wrapped sources (`sqlx`, `bcrypt`, token errors) - logged with detail,
//!   surfaced as opaque 500 (or uniform 401 for token failures)

/// Error conversion implementations
pub mod conversion;

/// Error type definitions
pub mod types;

pub use types::ApiError;
