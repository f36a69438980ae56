//! Identity Model and Database Operations
//!
//! The `users` row type and its queries. Emails are stored normalized
//! (lowercase, trimmed); callers must normalize before lookup or insert,
//! see [`normalize_email`]. Ids are assigned at creation and never change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A registered identity.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    /// Normalized email address, unique at the storage layer
    pub email: String,
    /// bcrypt hash; never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Normalize an email for storage and lookup: lowercase and trimmed.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Insert a new identity.
///
/// The email must already be normalized. New accounts start active and
/// unverified. A duplicate email surfaces as a unique-constraint database
/// error; the register handler maps it to a conflict.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, is_active, is_verified, created_at, updated_at)
        VALUES (?, ?, ?, TRUE, FALSE, ?, ?)
        RETURNING id, email, password_hash, is_active, is_verified, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up an identity by normalized email.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, is_active, is_verified, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up an identity by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, is_active, is_verified, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Whether an identity with this normalized email already exists.
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[tokio::test]
    async fn create_and_fetch_user() {
        let pool = crate::server::config::setup_database("sqlite::memory:")
            .await
            .unwrap();

        let user = create_user(&pool, "a@x.com", "hash").await.unwrap();
        assert!(user.is_active);
        assert!(!user.is_verified);

        let by_email = get_user_by_email(&pool, "a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = get_user_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        assert!(email_exists(&pool, "a@x.com").await.unwrap());
        assert!(!email_exists(&pool, "b@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let pool = crate::server::config::setup_database("sqlite::memory:")
            .await
            .unwrap();

        create_user(&pool, "a@x.com", "hash").await.unwrap();
        let err = create_user(&pool, "a@x.com", "hash").await.unwrap_err();

        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("expected database error, got {other:?}"),
        }
    }
}
