//! Authentication Module
//!
//! User registration, login, and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - Identity model and database operations
//! ├── tokens.rs   - Session token issuing and verification
//! └── handlers/   - HTTP handlers (register, login, me)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password validated, email normalized, password
//!    bcrypt-hashed, identity created (201, no token)
//! 2. **Login**: credentials verified, active flag checked, token issued
//! 3. **Protected request**: the authorization gate verifies the bearer
//!    token and resolves its subject to a stored identity

/// HTTP handlers for authentication endpoints
pub mod handlers;

/// Session token issuing and verification
pub mod tokens;

/// Identity model and database operations
pub mod users;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{login, me, register};
pub use tokens::{Claims, TokenError, TokenService};
