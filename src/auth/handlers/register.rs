//! Registration Handler
//!
//! `POST /api/auth/register`
//!
//! 1. Validate email format and password length
//! 2. Normalize the email (lowercase, trimmed)
//! 3. Reject duplicates with 409
//! 4. Hash the password with bcrypt and create the identity
//!
//! Returns 201 with no body; the caller logs in separately. Passwords are
//! hashed with bcrypt's default cost and never logged.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::{create_user, email_exists, normalize_email};
use crate::error::ApiError;

const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_EMAIL_LENGTH: usize = 255;

/// Validate a registration request before touching the database.
fn validate_register_request(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.email.trim().is_empty() {
        return Err(ApiError::validation("email is required"));
    }

    if request.email.len() > MAX_EMAIL_LENGTH {
        return Err(ApiError::validation(format!(
            "email must not exceed {MAX_EMAIL_LENGTH} characters"
        )));
    }

    if !request.email.contains('@') || !request.email.contains('.') {
        return Err(ApiError::validation("email format is invalid"));
    }

    if request.password.is_empty() {
        return Err(ApiError::validation("password is required"));
    }

    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Register handler.
///
/// # Errors
///
/// * `400 Bad Request` - invalid email format or password too short
/// * `409 Conflict` - an identity with this normalized email exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    validate_register_request(&request)?;

    let email = normalize_email(&request.email);
    tracing::debug!("Registration attempt for: {}", email);

    if email_exists(&pool, &email).await? {
        tracing::warn!("Registration with already-registered email: {}", email);
        return Err(ApiError::conflict("email is already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    // The existence check above races with concurrent registrations; the
    // UNIQUE constraint is authoritative.
    match create_user(&pool, &email, &password_hash).await {
        Ok(user) => {
            tracing::info!("User registered: {} ({})", user.email, user.id);
            Ok(StatusCode::CREATED)
        }
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            tracing::warn!("Registration lost uniqueness race for: {}", email);
            Err(ApiError::conflict("email is already registered"))
        }
        Err(err) => Err(err.into()),
    }
}
