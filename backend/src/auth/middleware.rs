//! The token gate: per-request authorization middleware.
//!
//! Decides for every incoming path whether to let the request through or
//! redirect it to a login surface, based on presence and freshness of the
//! role-scoped cookie. The decision itself is a pure function over the path
//! and a cookie lookup, so every branch is unit-testable without a server.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::models::TokenRole;
use crate::auth::service;
use crate::utils::now_secs;

/// Protected path prefixes and the token each one requires. Order matters:
/// the first matching prefix wins.
const TOKEN_ROUTES: &[(&str, TokenRole)] = &[("/user", TokenRole::User), ("/admin", TokenRole::Admin)];

/// Exact-match public paths that bypass the gate even though their prefix
/// is protected.
const PUBLIC_ROUTES: &[&str] = &["/admin/login"];

/// Asset extensions excluded from gating, mirroring the route matcher.
const ASSET_EXTENSIONS: &[&str] = &[".png", ".svg", ".css", ".js", ".ico"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// Session endpoints and static assets are outside the gate's jurisdiction.
fn is_excluded(path: &str) -> bool {
    path == "/api"
        || path.starts_with("/api/")
        || path.starts_with("/assets/")
        || ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// The gate algorithm. `lookup` resolves a cookie name to its value.
///
/// Unlisted paths fail open: any path that is neither excluded, public,
/// nor under a protected prefix is allowed through without a token.
pub fn decide<F>(path: &str, lookup: F, now_secs: u64) -> GateDecision
where
    F: Fn(&str) -> Option<String>,
{
    if is_excluded(path) {
        return GateDecision::Allow;
    }

    if PUBLIC_ROUTES.contains(&path) {
        return GateDecision::Allow;
    }

    let Some((_, role)) = TOKEN_ROUTES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
    else {
        return GateDecision::Allow;
    };

    // Admin surfaces bounce to the admin login page, everything else to
    // the site root.
    let target = if path.starts_with("/admin") {
        "/admin/login"
    } else {
        "/"
    };

    match lookup(role.cookie_name()) {
        Some(token) if service::is_token_fresh(&token, now_secs) => GateDecision::Allow,
        Some(_) | None => GateDecision::Redirect(target),
    }
}

/// Axum middleware wrapping [`decide`]. A redirect short-circuits the
/// request; an allow passes it downstream unchanged.
pub async fn token_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let jar = CookieJar::from_headers(request.headers());

    let decision = decide(
        &path,
        |name| jar.get(name).map(|cookie| cookie.value().to_string()),
        now_secs(),
    );

    match decision {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(target) => {
            tracing::debug!(path = %path, target, "token gate redirect");
            Redirect::to(target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::service::test_tokens::jwt_with_exp;

    const NOW: u64 = 1_700_000_000;

    fn no_cookies(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn unprotected_paths_fail_open() {
        assert_eq!(decide("/", no_cookies, NOW), GateDecision::Allow);
        assert_eq!(decide("/about-us", no_cookies, NOW), GateDecision::Allow);
        assert_eq!(decide("/pricing", no_cookies, NOW), GateDecision::Allow);
    }

    #[test]
    fn api_and_assets_are_excluded() {
        assert_eq!(decide("/api/get-cookie", no_cookies, NOW), GateDecision::Allow);
        assert_eq!(decide("/assets/logo.png", no_cookies, NOW), GateDecision::Allow);
        assert_eq!(decide("/favicon.ico", no_cookies, NOW), GateDecision::Allow);
    }

    #[test]
    fn admin_login_is_public_despite_admin_prefix() {
        assert_eq!(decide("/admin/login", no_cookies, NOW), GateDecision::Allow);
    }

    #[test]
    fn missing_user_token_redirects_to_root() {
        assert_eq!(
            decide("/user/catalogue", no_cookies, NOW),
            GateDecision::Redirect("/")
        );
    }

    #[test]
    fn missing_admin_token_redirects_to_admin_login() {
        assert_eq!(
            decide("/admin/dashboard", no_cookies, NOW),
            GateDecision::Redirect("/admin/login")
        );
    }

    #[test]
    fn expired_token_is_treated_like_a_missing_one() {
        let stale = jwt_with_exp(NOW - 10);
        let lookup = |name: &str| (name == "userToken").then(|| stale.clone());
        assert_eq!(
            decide("/user/dashboard", lookup, NOW),
            GateDecision::Redirect("/")
        );
    }

    #[test]
    fn fresh_token_allows_the_request_through() {
        let fresh = jwt_with_exp(NOW + 3600);
        let lookup = |name: &str| (name == "adminToken").then(|| fresh.clone());
        assert_eq!(decide("/admin/companies", lookup, NOW), GateDecision::Allow);
    }

    #[test]
    fn user_token_does_not_satisfy_admin_routes() {
        let fresh = jwt_with_exp(NOW + 3600);
        let lookup = |name: &str| (name == "userToken").then(|| fresh.clone());
        assert_eq!(
            decide("/admin/users", lookup, NOW),
            GateDecision::Redirect("/admin/login")
        );
    }

    #[test]
    fn undecodable_cookie_redirects_instead_of_erroring() {
        let lookup = |name: &str| (name == "userToken").then(|| "garbage".to_string());
        assert_eq!(
            decide("/user/profile", lookup, NOW),
            GateDecision::Redirect("/")
        );
    }
}
