//! Server Configuration
//!
//! Loads server configuration from environment variables and sets up the
//! SQLite connection pool.
//!
//! # Configuration Sources
//!
//! - `DATABASE_URL` - SQLite URL, defaults to `sqlite://redsocial.db`
//! - `JWT_SECRET` - token signing key, required, minimum 32 bytes
//! - `TOKEN_TTL_SECS` - token lifetime in seconds, defaults to 86400
//! - `SERVER_PORT` - listen port, defaults to 3000
//!
//! The signing secret has no default: a missing or short key is a startup
//! error, not a degraded mode.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

/// Minimum signing key length in bytes (256 bits for HMAC-SHA256).
const MIN_SECRET_BYTES: usize = 32;

const DEFAULT_DATABASE_URL: &str = "sqlite://redsocial.db";
const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors reported at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("{0} must be a valid {1}")]
    InvalidVar(&'static str, &'static str),

    #[error("JWT_SECRET must be at least {MIN_SECRET_BYTES} bytes")]
    WeakSecret,
}

/// Server configuration.
///
/// The signing secret and token TTL are passed into the token service at
/// construction; nothing reads them from the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Fails if `JWT_SECRET` is missing or shorter than 32 bytes, or if a
    /// numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakSecret);
        }

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidVar("TOKEN_TTL_SECS", "integer"))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("SERVER_PORT", "port number"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            port,
        })
    }
}

/// Create the SQLite connection pool and run migrations.
///
/// Foreign keys are enabled per connection; SQLite leaves them off by
/// default and the schema relies on cascading deletes.
pub async fn setup_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database exists per connection, so the pool must not
    // grow beyond one or later connections would see an empty schema.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_secret_is_rejected() {
        // from_env reads process-global env vars; exercise the length rule
        // directly instead.
        assert!("short".len() < MIN_SECRET_BYTES);
        assert!("0123456789abcdef0123456789abcdef".len() >= MIN_SECRET_BYTES);
    }

    #[tokio::test]
    async fn in_memory_database_migrates() {
        let pool = setup_database("sqlite::memory:").await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
