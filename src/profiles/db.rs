//! Profile Model and Database Operations
//!
//! Display profiles are 1:1 with identities (UNIQUE user_id, cascade on
//! user delete) and carry a globally unique alias. Reads join the owning
//! user's email for the response.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A profile row joined with its owner's email.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
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

/// Field set accepted when creating or updating a profile.
#[derive(Debug, Clone)]
pub struct ProfileFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub alias: &'a str,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
}

const PROFILE_COLUMNS: &str = r#"
    up.id, up.user_id, u.email,
    up.first_name, up.last_name, up.alias,
    up.birth_date, up.bio, up.avatar_url,
    up.created_at, up.updated_at
"#;

/// List every profile.
pub async fn list_profiles(pool: &SqlitePool) -> Result<Vec<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        r#"
        SELECT {PROFILE_COLUMNS}
        FROM user_profiles up
        JOIN users u ON u.id = up.user_id
        ORDER BY up.created_at ASC
        "#
    ))
    .fetch_all(pool)
    .await
}

/// Fetch a profile by its own id.
pub async fn get_profile_by_id(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        r#"
        SELECT {PROFILE_COLUMNS}
        FROM user_profiles up
        JOIN users u ON u.id = up.user_id
        WHERE up.id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fetch a profile by its owning identity.
pub async fn get_profile_by_user_id(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(&format!(
        r#"
        SELECT {PROFILE_COLUMNS}
        FROM user_profiles up
        JOIN users u ON u.id = up.user_id
        WHERE up.user_id = ?
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Create or update the profile owned by `user_id`.
///
/// Inserts on first write, updates in place afterwards. A taken alias
/// surfaces as a unique-constraint database error; the handler maps it to
/// a conflict.
pub async fn upsert_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    fields: ProfileFields<'_>,
) -> Result<UserProfile, sqlx::Error> {
    let now = Utc::now();

    let existing = get_profile_by_user_id(pool, user_id).await?;

    match existing {
        Some(profile) => {
            sqlx::query(
                r#"
                UPDATE user_profiles
                SET first_name = ?, last_name = ?, alias = ?,
                    birth_date = ?, bio = ?, avatar_url = ?, updated_at = ?
                WHERE user_id = ?
                "#,
            )
            .bind(fields.first_name)
            .bind(fields.last_name)
            .bind(fields.alias)
            .bind(fields.birth_date)
            .bind(fields.bio)
            .bind(fields.avatar_url)
            .bind(now)
            .bind(user_id)
            .execute(pool)
            .await?;

            get_profile_by_id(pool, profile.id)
                .await?
                .ok_or(sqlx::Error::RowNotFound)
        }
        None => {
            let id = Uuid::new_v4();
            sqlx::query(
                r#"
                INSERT INTO user_profiles
                    (id, user_id, first_name, last_name, alias, birth_date, bio, avatar_url, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(user_id)
            .bind(fields.first_name)
            .bind(fields.last_name)
            .bind(fields.alias)
            .bind(fields.birth_date)
            .bind(fields.bio)
            .bind(fields.avatar_url)
            .bind(now)
            .bind(now)
            .execute(pool)
            .await?;

            get_profile_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
        }
    }
}
