//! Route Access Policy
//!
//! Every route is statically classified as public (no token required) or
//! protected (valid bearer token required). The table below is the single
//! source of truth and is consulted by the authorization gate before any
//! handler runs.
//!
//! Patterns use the router's segment syntax: `{param}` matches exactly one
//! path segment. Routes absent from the table are treated as public so they
//! fall through to the 404 fallback rather than demanding a token for a
//! route that does not exist.

use axum::http::Method;

/// Access classification for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token required
    Public,
    /// Valid bearer token required
    Protected,
}

/// Statically declared route classification table.
const ROUTE_POLICY: &[(&str, &str, Access)] = &[
    ("POST", "/api/auth/register", Access::Public),
    ("POST", "/api/auth/login", Access::Public),
    ("GET", "/api/auth/me", Access::Protected),
    ("POST", "/api/posts", Access::Protected),
    ("GET", "/api/posts", Access::Public),
    ("GET", "/api/users/{user_id}/posts", Access::Public),
    ("PUT", "/api/profiles/me", Access::Protected),
    ("GET", "/api/profiles", Access::Public),
    ("GET", "/api/profiles/{id}", Access::Public),
    ("GET", "/api/users/{user_id}/profile", Access::Public),
];

/// Classify a request by method and path.
pub fn route_access(method: &Method, path: &str) -> Access {
    for (entry_method, pattern, access) in ROUTE_POLICY {
        if method.as_str() == *entry_method && path_matches(pattern, path) {
            return *access;
        }
    }
    Access::Public
}

/// Segment-wise pattern match; `{param}` segments match any single segment.
fn path_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (Some(expected), Some(actual)) => {
                let is_param = expected.starts_with('{') && expected.ends_with('}');
                if !is_param && expected != actual {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_are_classified() {
        assert_eq!(
            route_access(&Method::GET, "/api/auth/me"),
            Access::Protected
        );
        assert_eq!(route_access(&Method::POST, "/api/posts"), Access::Protected);
        assert_eq!(
            route_access(&Method::PUT, "/api/profiles/me"),
            Access::Protected
        );
    }

    #[test]
    fn public_routes_are_classified() {
        assert_eq!(
            route_access(&Method::POST, "/api/auth/login"),
            Access::Public
        );
        assert_eq!(route_access(&Method::GET, "/api/posts"), Access::Public);
        assert_eq!(
            route_access(&Method::GET, "/api/profiles/123"),
            Access::Public
        );
    }

    #[test]
    fn classification_depends_on_method() {
        // Same path, different verbs: listing is public, creating is not.
        assert_eq!(route_access(&Method::GET, "/api/posts"), Access::Public);
        assert_eq!(route_access(&Method::POST, "/api/posts"), Access::Protected);
    }

    #[test]
    fn unknown_routes_default_to_public() {
        assert_eq!(route_access(&Method::GET, "/nope"), Access::Public);
        assert_eq!(route_access(&Method::DELETE, "/api/posts"), Access::Public);
    }

    #[test]
    fn param_segments_match_any_value() {
        assert!(path_matches(
            "/api/users/{user_id}/posts",
            "/api/users/0be8a02c/posts"
        ));
        assert!(!path_matches("/api/users/{user_id}/posts", "/api/users/posts"));
        assert!(!path_matches(
            "/api/users/{user_id}/posts",
            "/api/users/0be8a02c/profile"
        ));
    }
}
