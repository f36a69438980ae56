//! Router Assembly
//!
//! Combines the API routes, the authorization gate, request tracing, and
//! the 404 fallback into the final Axum router.
//!
//! Layer order matters: the gate wraps every route so no handler runs
//! before the route's access classification has been enforced.

use axum::http::StatusCode;
use axum::middleware;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::authorization_gate;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes and middleware configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    app_state.clone(),
                    authorization_gate,
                )),
        )
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
