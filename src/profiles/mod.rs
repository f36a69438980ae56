//! Profiles Module
//!
//! User-facing display data, distinct from login credentials. Each identity
//! owns at most one profile; the profile is deleted with its identity.
//!
//! ```text
//! profiles/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Profile model and queries
//! └── handlers.rs - HTTP handlers
//! ```

/// Profile model and database operations
pub mod db;

/// HTTP handlers for profile endpoints
pub mod handlers;

pub use db::{ProfileFields, UserProfile};
pub use handlers::{
    get_profile, get_user_profile, list_profiles, upsert_my_profile, ProfileResponse,
    UpsertProfileRequest,
};
