//! Server Module
//!
//! Initialization and configuration for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports
//! ├── config.rs  - Environment configuration and database setup
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - App construction
//! ```

/// Environment configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
