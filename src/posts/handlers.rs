//! Post Handlers
//!
//! `POST /api/posts` (protected) and the public listing endpoints.
//!
//! Listings are paginated Spring-style: zero-based `page`, `size` clamped
//! to the configured maximum no matter what the caller asks for, results
//! ordered by creation time with the most recent first.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db;

const MAX_CONTENT_LENGTH: usize = 1000;
const MAX_MEDIA_URL_LENGTH: usize = 500;

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Post creation request. At least one of the two fields must be present
/// and non-blank.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub media_url: Option<String>,
}

/// Post as returned to callers.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub alias: Option<String>,
    pub content: Option<String>,
    pub media_url: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<db::Post> for PostResponse {
    fn from(post: db::Post) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            alias: post.alias,
            content: post.content,
            media_url: post.media_url,
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Pagination query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    /// Resolve to a zero-based page and a clamped size.
    ///
    /// A requested size above the maximum is silently reduced; zero is
    /// bumped to one so a page is never degenerate.
    pub fn resolve(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(0);
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        (page, size)
    }
}

/// One page of results.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, page: u32, size: u32, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + i64::from(size) - 1) / i64::from(size)
        };
        Self {
            items,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Treat blank strings the same as absent fields.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn validate_create_post_request(request: &CreatePostRequest) -> Result<(), ApiError> {
    let content = non_blank(&request.content);
    let media_url = non_blank(&request.media_url);

    if content.is_none() && media_url.is_none() {
        return Err(ApiError::validation(
            "a post requires content or a media URL",
        ));
    }

    if let Some(content) = content {
        if content.len() > MAX_CONTENT_LENGTH {
            return Err(ApiError::validation(format!(
                "content must not exceed {MAX_CONTENT_LENGTH} characters"
            )));
        }
    }

    if let Some(media_url) = media_url {
        if media_url.len() > MAX_MEDIA_URL_LENGTH {
            return Err(ApiError::validation(format!(
                "media URL must not exceed {MAX_MEDIA_URL_LENGTH} characters"
            )));
        }
    }

    Ok(())
}

/// Create post handler (protected).
///
/// # Errors
///
/// * `400 Bad Request` - neither content nor media URL present, or a field
///   exceeds its limit
/// * `401 Unauthorized` - handled by the gate before this runs
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    validate_create_post_request(&request)?;

    let post = db::create_post(
        &pool,
        current.id,
        non_blank(&request.content),
        non_blank(&request.media_url),
    )
    .await?;

    tracing::info!("Post {} created by {}", post.id, current.email);

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// List posts handler (public). Newest first, size capped.
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<PostResponse>>, ApiError> {
    let (page, size) = params.resolve();
    let offset = i64::from(page) * i64::from(size);

    let posts = db::list_posts(&pool, i64::from(size), offset).await?;
    let total = db::count_posts(&pool).await?;

    let items = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(PageResponse::new(items, page, size, total)))
}

/// List one author's posts handler (public).
pub async fn list_user_posts(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<PostResponse>>, ApiError> {
    let (page, size) = params.resolve();
    let offset = i64::from(page) * i64::from(size);

    let posts = db::list_posts_by_user(&pool, user_id, i64::from(size), offset).await?;
    let total = db::count_posts_by_user(&pool, user_id).await?;

    let items = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(PageResponse::new(items, page, size, total)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content: Option<&str>, media_url: Option<&str>) -> CreatePostRequest {
        CreatePostRequest {
            content: content.map(String::from),
            media_url: media_url.map(String::from),
        }
    }

    #[test]
    fn requires_content_or_media() {
        assert!(validate_create_post_request(&request(None, None)).is_err());
        assert!(validate_create_post_request(&request(Some("   "), None)).is_err());
        assert!(validate_create_post_request(&request(Some("hello"), None)).is_ok());
        assert!(validate_create_post_request(&request(None, Some("http://m/x.png"))).is_ok());
    }

    #[test]
    fn enforces_length_limits() {
        let long_content = "a".repeat(MAX_CONTENT_LENGTH + 1);
        assert!(validate_create_post_request(&request(Some(&long_content), None)).is_err());

        let long_url = "u".repeat(MAX_MEDIA_URL_LENGTH + 1);
        assert!(validate_create_post_request(&request(None, Some(&long_url))).is_err());
    }

    #[test]
    fn page_size_is_clamped() {
        let params = PageParams {
            page: None,
            size: Some(10_000),
        };
        assert_eq!(params.resolve(), (0, MAX_PAGE_SIZE));

        let params = PageParams {
            page: Some(3),
            size: Some(0),
        };
        assert_eq!(params.resolve(), (3, 1));

        assert_eq!(PageParams::default().resolve(), (0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: PageResponse<()> = PageResponse::new(vec![], 0, 10, 21);
        assert_eq!(page.total_pages, 3);

        let empty: PageResponse<()> = PageResponse::new(vec![], 0, 10, 0);
        assert_eq!(empty.total_pages, 0);
    }
}
