//! Server Initialization
//!
//! Builds the Axum application from configuration: connects the database,
//! runs migrations, constructs the token service, and assembles the router.

use axum::Router;

use crate::auth::tokens::TokenService;
use crate::routes::router::create_router;
use crate::server::config::{setup_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Errors
///
/// Fails if the database cannot be reached or migrations fail. Unlike a
/// degraded start, a missing store would make every endpoint useless, so
/// startup aborts instead.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing redsocial backend server");

    let pool = setup_database(&config.database_url).await?;

    let tokens = TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl_secs);

    let app_state = AppState::new(pool, tokens);

    Ok(create_router(app_state))
}
