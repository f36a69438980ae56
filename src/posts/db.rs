//! Post Model and Database Operations
//!
//! Posts are append-only from the API's perspective: rows are inserted with
//! zeroed engagement counters and never updated or deleted through this
//! service. Listings join the author's profile for the display alias and
//! are always ordered by creation time, most recent first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A post row joined with its author's optional profile alias.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Display alias of the author's profile, when one exists
    pub alias: Option<String>,
}

const POST_COLUMNS: &str = r#"
    p.id, p.user_id, p.content, p.media_url,
    p.likes_count, p.comments_count, p.created_at, p.updated_at,
    up.alias AS alias
"#;

/// Insert a new post for the given author.
///
/// Counters start at zero. The caller has already validated that at least
/// one of content/media_url is present.
pub async fn create_post(
    pool: &SqlitePool,
    user_id: Uuid,
    content: Option<&str>,
    media_url: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, user_id, content, media_url, likes_count, comments_count, created_at, updated_at)
        VALUES (?, ?, ?, ?, 0, 0, ?, ?)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(content)
    .bind(media_url)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_post_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Fetch a single post with its author alias.
pub async fn get_post_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts p
        LEFT JOIN user_profiles up ON up.user_id = p.user_id
        WHERE p.id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all posts, newest first.
pub async fn list_posts(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts p
        LEFT JOIN user_profiles up ON up.user_id = p.user_id
        ORDER BY p.created_at DESC
        LIMIT ? OFFSET ?
        "#
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// List one author's posts, newest first.
pub async fn list_posts_by_user(
    pool: &SqlitePool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts p
        LEFT JOIN user_profiles up ON up.user_id = p.user_id
        WHERE p.user_id = ?
        ORDER BY p.created_at DESC
        LIMIT ? OFFSET ?
        "#
    ))
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Total number of posts.
pub async fn count_posts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
}

/// Total number of posts by one author.
pub async fn count_posts_by_user(pool: &SqlitePool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
}
