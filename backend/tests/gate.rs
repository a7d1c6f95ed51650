//! End-to-end tests for the token gate.
//!
//! The gate wraps the whole router, so protected prefixes redirect before
//! any route matching happens; an allowed request to an unrouted path falls
//! through to a plain 404, which is how these tests distinguish "allowed"
//! from "redirected".

mod common;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use common::{
    gateway, get, get_with_cookie, json_body, jwt_with_exp, post_json, FAR_FUTURE, LONG_AGO,
};

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn admin_path_without_token_redirects_to_admin_login() {
    let response = gateway().oneshot(get("/admin/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn user_path_without_token_redirects_to_root() {
    let response = gateway().oneshot(get("/user/catalogue")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn admin_login_page_is_reachable_without_a_token() {
    let response = gateway().oneshot(get("/admin/login")).await.unwrap();
    assert_ne!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn unlisted_paths_fail_open() {
    let response = gateway().oneshot(get("/about-us")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expired_token_is_treated_like_a_missing_one() {
    let cookie = format!("userToken={}", jwt_with_exp(LONG_AGO));
    let response = gateway()
        .oneshot(get_with_cookie("/user/dashboard", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn fresh_token_passes_the_gate_unchanged() {
    let cookie = format!("userToken={}", jwt_with_exp(FAR_FUTURE));
    let response = gateway()
        .oneshot(get_with_cookie("/user/dashboard", &cookie))
        .await
        .unwrap();
    // Allowed through the gate; there is no page route, so plain 404.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_ignore_the_user_token() {
    let cookie = format!("userToken={}", jwt_with_exp(FAR_FUTURE));
    let response = gateway()
        .oneshot(get_with_cookie("/admin/companies", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn undecodable_cookie_redirects_instead_of_erroring() {
    let response = gateway()
        .oneshot(get_with_cookie("/admin/users", "adminToken=not-a-jwt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn session_endpoints_are_excluded_from_the_gate() {
    // Reaches the handler (400: missing tokenName) instead of redirecting.
    let response = gateway().oneshot(get("/api/get-cookie")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stored_login_token_satisfies_subsequent_user_requests() {
    // Store a fresh token the way a login surface would.
    let token = jwt_with_exp(FAR_FUTURE);
    let response = gateway()
        .oneshot(post_json(
            "/api/set-cookie",
            &serde_json::json!({ "tokenName": "userToken", "tokenValue": token }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("bearer cookie should be set")
        .to_str()
        .unwrap()
        .to_string();
    let pair = set_cookie.split(';').next().unwrap().to_string();

    let body = json_body(response).await;
    assert_eq!(body["ok"], true);

    // Replay the cookie against a protected path: no redirect.
    let response = gateway()
        .oneshot(get_with_cookie("/user/dashboard", &pair))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
