//! Shared integration-test helpers
//!
//! Builds the real router over an in-memory SQLite pool so the suite runs
//! the full request path (gate, handlers, storage) with no external
//! services.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};

use redsocial::auth::tokens::TokenService;
use redsocial::routes::create_router;
use redsocial::server::config::setup_database;
use redsocial::server::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Spin up the application with the given token TTL.
pub async fn spawn_app(token_ttl_secs: u64) -> TestServer {
    let (server, _pool) = spawn_app_with_pool(token_ttl_secs).await;
    server
}

/// Spin up the application, also handing back the pool for tests that need
/// to poke at the database directly.
pub async fn spawn_app_with_pool(token_ttl_secs: u64) -> (TestServer, sqlx::SqlitePool) {
    let pool = setup_database("sqlite::memory:")
        .await
        .expect("failed to set up test database");

    let tokens = TokenService::new(TEST_SECRET.as_bytes(), token_ttl_secs);
    let app = create_router(AppState::new(pool.clone(), tokens));

    let server = TestServer::new(app).expect("failed to start test server");
    (server, pool)
}

/// Spin up the application with a long-lived token TTL.
pub async fn spawn_default_app() -> TestServer {
    spawn_app(3600).await
}

/// Register an account, asserting success.
pub async fn register(server: &TestServer, email: &str, password: &str) {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
}

/// Log in and return the bearer token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Register and log in, returning the bearer token.
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> String {
    register(server, email, password).await;
    login(server, email, password).await
}
