//! Shared helpers for gateway integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use http_body_util::BodyExt;

use backend::config::Config;
use backend::{app, AppState};

/// A gateway wired to an unreachable core API. Gate and session tests
/// never proxy upstream, so the address is never dialed.
pub fn gateway() -> Router {
    app(AppState::new(Config::for_tests("http://127.0.0.1:59999")))
}

/// Unsigned JWT with the given `exp`; the gate only decodes, so the fake
/// signature is never inspected.
pub fn jwt_with_exp(exp: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(&serde_json::json!({ "sub": "42", "exp": exp })).unwrap(),
    );
    format!("{header}.{payload}.fakesig")
}

/// Comfortably past any test run.
pub const FAR_FUTURE: u64 = 4_102_444_800;

/// Comfortably before any test run.
pub const LONG_AGO: u64 = 946_684_800;

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
