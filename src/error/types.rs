//! Error Type Definitions
//!
//! `ApiError` is the single error type returned by handlers. Each variant
//! maps to an HTTP status code; variants wrapping an internal source keep
//! the detail for logging while the external message stays opaque.

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::tokens::TokenError;

/// Fixed external message for every authentication failure. Unknown email,
/// wrong password, inactive account, and invalid/expired/malformed tokens
/// all surface identically to prevent account enumeration.
pub const AUTH_FAILED_MESSAGE: &str = "authentication failed";

const INTERNAL_MESSAGE: &str = "internal server error";

/// Errors returned by HTTP handlers and the authorization gate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Credential or account-state failure during login, or a missing
    /// bearer token on a protected route
    #[error("{AUTH_FAILED_MESSAGE}")]
    Authentication,

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (duplicate email or alias)
    #[error("{0}")]
    Conflict(String),

    /// Token verification failure; reported to the caller exactly like any
    /// other authentication failure
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Database fault
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing fault
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication | Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the caller.
    ///
    /// Internal faults and token failures never leak their detail here;
    /// the detail goes to the log in `into_response`.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::Authentication | Self::Token(_) => AUTH_FAILED_MESSAGE.to_string(),
            Self::Database(_) | Self::Hash(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}
