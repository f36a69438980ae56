//! Authorization Gate
//!
//! Router-wide middleware that converts an inbound request's bearer token
//! into an established caller identity, or rejects the request.
//!
//! Per-request state machine:
//!
//! - **Unauthenticated** (initial): no identity established yet
//! - **Authenticated**: token verified and its subject resolved to a stored
//!   identity; `CurrentUser` attached to the request extensions
//! - **Rejected** (terminal): missing, malformed, expired, or
//!   signature-invalid token on a protected route; the request fails with
//!   401 before reaching any handler
//!
//! Public routes pass through untouched. The gate deliberately does not
//! re-check the account's active flag: a token stays valid for its full TTL
//! regardless of later deactivation (there is no revocation list).

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::middleware::policy::{route_access, Access};
use crate::server::state::AppState;

/// Caller identity established by the gate.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Authorization gate middleware.
///
/// Consults the static route policy table; protected routes require a
/// verified token whose subject resolves to a stored identity.
pub async fn authorization_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if route_access(request.method(), request.uri().path()) == Access::Public {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::Authentication
    })?;

    let claims = state.tokens.verify(token).map_err(|err| {
        tracing::warn!("Token rejected: {}", err);
        ApiError::from(err)
    })?;

    // The subject is an email; it must still resolve to a stored identity.
    let user = get_user_by_email(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", claims.sub);
            ApiError::Authentication
        })?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity established by the gate.
///
/// Only usable on protected routes; a public route never has a
/// `CurrentUser` in its extensions.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser missing from request extensions");
                ApiError::Authentication
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }
}
