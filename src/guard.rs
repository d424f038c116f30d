//! Route Guard
//!
//! Decides whether a route may render given the session status.
//! UX only: the API still has to validate the session cookie.

use crate::routes::{self, encode_segment, PLACES_PREFIX};

/// Session status as seen by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Auth probe still in flight and nothing stored
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

/// What a route render should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Hold rendering until the probe settles
    Wait,
    Redirect(String),
}

/// Query key carrying the originally requested location
pub const REDIRECT_PARAM: &str = "redirect";

pub fn is_protected(path: &str) -> bool {
    path == PLACES_PREFIX || path.starts_with(&format!("{}/", PLACES_PREFIX))
}

/// Guard decision for `path` (pathname plus optional `?query`)
pub fn guard_route(status: AuthStatus, path: &str) -> RouteDecision {
    let pathname = path.split('?').next().unwrap_or(path);
    if !is_protected(pathname) {
        return RouteDecision::Allow;
    }
    match status {
        AuthStatus::Authenticated => RouteDecision::Allow,
        AuthStatus::Unknown => RouteDecision::Wait,
        AuthStatus::Anonymous => RouteDecision::Redirect(login_redirect(path)),
    }
}

/// `/login?redirect=...` preserving the requested location
pub fn login_redirect(requested: &str) -> String {
    if requested.is_empty() || requested == routes::HOME {
        return routes::LOGIN.to_string();
    }
    format!("{}?{}={}", routes::LOGIN, REDIRECT_PARAM, encode_segment(requested))
}

/// Where to go after login. Only local absolute paths are honoured.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect.map(str::trim) {
        Some(target)
            if target.starts_with('/')
                && !target.starts_with("//")
                && !target.starts_with("/\\")
                && target != routes::LOGIN =>
        {
            target.to_string()
        }
        _ => routes::HOME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_always_allowed() {
        for path in ["/", "/about", "/contact", "/login", "/register", "/placesmore"] {
            assert_eq!(guard_route(AuthStatus::Anonymous, path), RouteDecision::Allow, "{}", path);
            assert_eq!(guard_route(AuthStatus::Unknown, path), RouteDecision::Allow, "{}", path);
        }
    }

    #[test]
    fn test_failed_probe_redirects_and_preserves_path() {
        let decision = guard_route(AuthStatus::Anonymous, "/places/Chennai/Marina%20Beach");
        assert_eq!(
            decision,
            RouteDecision::Redirect("/login?redirect=%2Fplaces%2FChennai%2FMarina%2520Beach".to_string())
        );

        let RouteDecision::Redirect(to) = decision else { unreachable!() };
        let raw = to.split_once("redirect=").map(|(_, v)| v).unwrap();
        let original = routes::decode_segment(raw);
        assert_eq!(post_login_target(Some(&original)), "/places/Chennai/Marina%20Beach");
    }

    #[test]
    fn test_query_is_kept_in_redirect() {
        let RouteDecision::Redirect(to) = guard_route(AuthStatus::Anonymous, "/places/Salem?tab=hidden") else {
            panic!("expected redirect");
        };
        assert_eq!(routes::decode_segment(to.trim_start_matches("/login?redirect=")), "/places/Salem?tab=hidden");
    }

    #[test]
    fn test_authenticated_and_pending() {
        assert_eq!(guard_route(AuthStatus::Authenticated, "/places/Madurai"), RouteDecision::Allow);
        assert_eq!(guard_route(AuthStatus::Unknown, "/places/Madurai"), RouteDecision::Wait);
    }

    #[test]
    fn test_post_login_target_rejects_foreign_targets() {
        assert_eq!(post_login_target(None), "/");
        assert_eq!(post_login_target(Some("")), "/");
        assert_eq!(post_login_target(Some("https://evil.example")), "/");
        assert_eq!(post_login_target(Some("//evil.example/x")), "/");
        assert_eq!(post_login_target(Some("/\\evil.example")), "/");
        assert_eq!(post_login_target(Some("/login")), "/");
        assert_eq!(post_login_target(Some("/places/Salem")), "/places/Salem");
    }

    #[test]
    fn test_login_redirect_for_home_is_plain() {
        assert_eq!(login_redirect("/"), "/login");
    }
}
