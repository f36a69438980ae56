//! API Route Registration
//!
//! Registers every HTTP endpoint. Access control is not configured here:
//! each route's public/protected classification lives in the static table
//! in [`crate::middleware::policy`], which the authorization gate consults
//! before dispatch.
//!
//! # Routes
//!
//! - `POST /api/auth/register` - create an identity (public)
//! - `POST /api/auth/login` - exchange credentials for a token (public)
//! - `GET /api/auth/me` - current identity (protected)
//! - `POST /api/posts` - create a post (protected)
//! - `GET /api/posts` - paginated listing (public)
//! - `GET /api/users/{user_id}/posts` - one author's posts (public)
//! - `PUT /api/profiles/me` - create/update own profile (protected)
//! - `GET /api/profiles` - all profiles (public)
//! - `GET /api/profiles/{id}` - profile by id (public)
//! - `GET /api/users/{user_id}/profile` - profile by owner (public)

use axum::routing::{get, post, put};
use axum::Router;

use crate::auth::handlers::{login, me, register};
use crate::posts::handlers::{create_post, list_posts, list_user_posts};
use crate::profiles::handlers::{get_profile, get_user_profile, list_profiles, upsert_my_profile};
use crate::server::state::AppState;

/// Add all API routes to the router.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        // Post endpoints
        .route("/api/posts", post(create_post).get(list_posts))
        .route("/api/users/{user_id}/posts", get(list_user_posts))
        // Profile endpoints
        .route("/api/profiles", get(list_profiles))
        .route("/api/profiles/me", put(upsert_my_profile))
        .route("/api/profiles/{id}", get(get_profile))
        .route("/api/users/{user_id}/profile", get(get_user_profile))
}
