//! Posts Module
//!
//! User-authored content items with engagement counters. Append-only: the
//! API exposes create and list, never edit or delete.
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Post model and queries
//! └── handlers.rs - HTTP handlers and pagination types
//! ```

/// Post model and database operations
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::Post;
pub use handlers::{
    create_post, list_posts, list_user_posts, CreatePostRequest, PageParams, PageResponse,
    PostResponse,
};
