//! Current User Handler
//!
//! `GET /api/auth/me` - returns the authenticated caller's identity. The
//! authorization gate has already verified the token and resolved the
//! subject; this handler only re-reads the row for a fresh view.

use axum::extract::State;
use axum::Json;
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Current user handler.
///
/// # Errors
///
/// * `401 Unauthorized` - handled by the gate before this runs
/// * `404 Not Found` - the identity vanished between gate and handler
pub async fn me(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, current.id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(Json(UserResponse::from(user)))
}
