//! Application State Management
//!
//! Defines the application state container and the `FromRef` implementations
//! that let Axum handlers extract only the piece of state they need.
//!
//! # Thread Safety
//!
//! All fields are cheap to clone and safe to share: `SqlitePool` is an
//! internally reference-counted handle and `TokenService` holds only
//! immutable key material. There is no shared mutable in-process state;
//! every request is handled independently and the database is the only
//! shared resource.

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::tokens::TokenService;

/// Central state container for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,

    /// Token service holding the signing key and TTL
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }
}

/// Allows handlers to extract `State(SqlitePool)` directly.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allows handlers to extract `State(TokenService)` directly.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
