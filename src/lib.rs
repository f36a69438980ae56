//! RedSocial - Social Networking Backend
//!
//! A conventional social-networking backend: user registration and login with
//! JWT bearer authentication, text/media posts, user profiles, and paginated
//! listing. Every endpoint is a straightforward mapping from HTTP request to
//! handler to relational row.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, and app construction
//! - **`auth`** - User model, token service, and auth endpoint handlers
//! - **`middleware`** - Authorization gate and the static route-access policy
//! - **`posts`** - Post model and create/list handlers
//! - **`profiles`** - Profile model and read/upsert handlers
//! - **`routes`** - Router assembly
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Request Lifecycle
//!
//! 1. The authorization gate classifies the route as public or protected
//!    using a statically declared policy table
//! 2. Protected routes require a valid `Authorization: Bearer <token>`
//!    header; the token's subject must resolve to a stored identity
//! 3. The handler runs with the caller's identity available in the request
//!    extensions
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt and never logged or returned
//! - Tokens are stateless HS256 JWTs; there is no revocation list, so a
//!   token stays valid until its expiry regardless of later account changes
//! - Every credential or token failure surfaces as the same 401 body to
//!   avoid leaking which check failed

pub mod auth;
pub mod error;
pub mod middleware;
pub mod posts;
pub mod profiles;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::config::AppConfig;
pub use server::state::AppState;
