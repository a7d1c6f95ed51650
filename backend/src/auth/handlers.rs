//! Session endpoints: the cookie-backed token store.
//!
//! Three handlers with deliberately boring semantics: read a named cookie,
//! write the role cookie (plus optional user metadata), delete exactly one
//! role's cookie. The bearer cookie is always `HttpOnly` + `Path=/` and
//! `Secure` outside local development; it is never readable from page
//! scripts. Auxiliary cookies (`userId`, `user`, `userType`) are plain.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::json;

use crate::auth::models::{GetCookieParams, LogoutRequest, SetSessionRequest};
use crate::AppState;

/// Builds the role-scoped bearer cookie with the store's fixed attributes.
pub fn bearer_cookie(name: &str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_string(), value))
        .http_only(true)
        .secure(secure)
        .path("/")
        .build()
}

fn plain_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value)).path("/").build()
}

/// `GET /api/get-cookie?tokenName=<name>` — read one named cookie.
pub async fn get_cookie(Query(params): Query<GetCookieParams>, jar: CookieJar) -> Response {
    let Some(token_name) = params.token_name.filter(|name| !name.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "message": "Token name is required" })),
        )
            .into_response();
    };

    let Some(cookie) = jar.get(&token_name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "ok": false, "message": format!("{token_name} not found") })),
        )
            .into_response();
    };

    Json(json!({
        "ok": true,
        "message": "Get user session successful!",
        "cookies": {
            "tokenName": token_name,
            "accessToken": cookie.value(),
        }
    }))
    .into_response()
}

/// `POST /api/set-cookie` — write the bearer cookie and any user metadata
/// that came with it. Absent fields are simply skipped.
pub async fn set_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SetSessionRequest>,
) -> Response {
    let mut jar = jar;

    if let Some(user_id) = &body.user_id {
        let value = match user_id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        jar = jar.add(plain_cookie("userId", value));
    }

    if let (Some(name), Some(value)) = (&body.token_name, &body.token_value) {
        jar = jar.add(bearer_cookie(name, value.clone(), state.config.secure_cookies));
    }

    if let Some(user) = &body.user {
        jar = jar.add(plain_cookie("user", user.to_string()));
    }

    if let Some(user_type) = &body.user_type {
        jar = jar.add(plain_cookie("userType", user_type.to_string()));
    }

    (jar, Json(json!({ "ok": true, "message": "Login successful!" }))).into_response()
}

/// `POST /api/logout` — delete exactly the named role's cookie. Any other
/// role's session in the same browser stays intact.
pub async fn logout(jar: CookieJar, Json(body): Json<LogoutRequest>) -> Response {
    let Some(role) = body.role.filter(|role| !role.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error": "Role is required." })),
        )
            .into_response();
    };

    let removal = Cookie::build((role.clone(), "")).path("/").build();
    let jar = jar.remove(removal);

    (
        jar,
        Json(json!({ "ok": true, "message": format!("{role} logged out successfully!") })),
    )
        .into_response()
}
