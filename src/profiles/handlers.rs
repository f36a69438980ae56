//! Profile Handlers
//!
//! Public reads (list, by id, by owning user) plus a protected upsert so
//! an authenticated caller can create or update their own profile.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::profiles::db::{self, ProfileFields, UserProfile};

const MAX_NAME_LENGTH: usize = 100;
const MAX_ALIAS_LENGTH: usize = 50;
const MAX_AVATAR_URL_LENGTH: usize = 500;

/// Profile create/update request for `PUT /api/profiles/me`.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpsertProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub alias: String,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Profile as returned to callers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub alias: String,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            alias: profile.alias,
            birth_date: profile.birth_date,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

fn validate_upsert_request(request: &UpsertProfileRequest) -> Result<(), ApiError> {
    let first_name = request.first_name.trim();
    let last_name = request.last_name.trim();
    let alias = request.alias.trim();

    if first_name.is_empty() || last_name.is_empty() {
        return Err(ApiError::validation("first and last name are required"));
    }
    if first_name.len() > MAX_NAME_LENGTH || last_name.len() > MAX_NAME_LENGTH {
        return Err(ApiError::validation(format!(
            "names must not exceed {MAX_NAME_LENGTH} characters"
        )));
    }

    if alias.is_empty() {
        return Err(ApiError::validation("alias is required"));
    }
    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(ApiError::validation(format!(
            "alias must not exceed {MAX_ALIAS_LENGTH} characters"
        )));
    }

    if let Some(avatar_url) = request.avatar_url.as_deref() {
        if avatar_url.len() > MAX_AVATAR_URL_LENGTH {
            return Err(ApiError::validation(format!(
                "avatar URL must not exceed {MAX_AVATAR_URL_LENGTH} characters"
            )));
        }
    }

    Ok(())
}

/// List all profiles (public).
pub async fn list_profiles(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    let profiles = db::list_profiles(&pool).await?;
    Ok(Json(profiles.into_iter().map(ProfileResponse::from).collect()))
}

/// Fetch a profile by id (public).
///
/// # Errors
///
/// * `404 Not Found` - no profile with this id
pub async fn get_profile(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = db::get_profile_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("profile not found: {id}")))?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// Fetch the profile owned by a given user (public).
pub async fn get_user_profile(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = db::get_profile_by_user_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("no profile for user: {user_id}")))?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// Create or update the caller's own profile (protected).
///
/// # Errors
///
/// * `400 Bad Request` - missing or oversized fields
/// * `409 Conflict` - alias already taken by another profile
pub async fn upsert_my_profile(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    validate_upsert_request(&request)?;

    let fields = ProfileFields {
        first_name: request.first_name.trim(),
        last_name: request.last_name.trim(),
        alias: request.alias.trim(),
        birth_date: request.birth_date,
        bio: request.bio.as_deref(),
        avatar_url: request.avatar_url.as_deref(),
    };

    match db::upsert_profile(&pool, current.id, fields).await {
        Ok(profile) => {
            tracing::info!("Profile {} saved for {}", profile.alias, current.email);
            Ok(Json(ProfileResponse::from(profile)))
        }
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            tracing::warn!("Alias already taken: {}", request.alias.trim());
            Err(ApiError::conflict("alias is already taken"))
        }
        Err(err) => Err(err.into()),
    }
}
