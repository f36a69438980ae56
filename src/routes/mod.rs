//! Route Configuration Module
//!
//! - **`api_routes`** - endpoint registration
//! - **`router`** - final router assembly (gate, tracing, fallback)

/// API endpoint registration
pub mod api_routes;

/// Main router creation
pub mod router;

pub use router::create_router;
