//! Login Handler
//!
//! `POST /api/auth/login`
//!
//! Validates the presented email/password pair against stored credentials
//! and, on success, issues a session token.
//!
//! # Security
//!
//! Unknown email, wrong password, and inactive account all return the same
//! 401 body. The three cases are distinguished only in server-side tracing,
//! so the response gives no signal for account enumeration. bcrypt performs
//! the constant-time hash comparison.

use axum::extract::State;
use axum::Json;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::users::{get_user_by_email, normalize_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler.
///
/// # Errors
///
/// * `400 Bad Request` - missing email or password
/// * `401 Unauthorized` - unknown account, wrong password, or inactive
///   account (indistinguishable to the caller)
/// * `500 Internal Server Error` - hash verification or database failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.email.trim().is_empty() {
        return Err(ApiError::validation("email is required"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("password is required"));
    }

    let email = normalize_email(&request.email);
    tracing::debug!("Login attempt for: {}", email);

    let user = get_user_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown account: {}", email);
            ApiError::Authentication
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login with wrong password for: {}", email);
        return Err(ApiError::Authentication);
    }

    if !user.is_active {
        tracing::warn!("Login for inactive account: {}", email);
        return Err(ApiError::Authentication);
    }

    let token = state.tokens.issue(&user.email)?;
    tracing::info!("Login succeeded for: {}", email);

    Ok(Json(AuthResponse { token }))
}
