//! Session and token data models.

use serde::{Deserialize, Serialize};

/// The two user classes a bearer cookie can authenticate. The cookie name
/// encodes the role, which is what allows an admin session and a user
/// session to coexist in one browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    User,
    Admin,
}

impl TokenRole {
    pub fn cookie_name(self) -> &'static str {
        match self {
            TokenRole::User => "userToken",
            TokenRole::Admin => "adminToken",
        }
    }
}

/// The only JWT claim the gate reads. Unknown claims are ignored; a payload
/// without `exp` counts as stale.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub exp: Option<u64>,
}

/// Body of `POST /api/set-cookie`. Field names are camelCase on the wire,
/// matching what login surfaces send.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetSessionRequest {
    pub token_name: Option<String>,
    pub token_value: Option<String>,
    pub user_id: Option<serde_json::Value>,
    pub user: Option<serde_json::Value>,
    pub user_type: Option<serde_json::Value>,
}

/// Body of `POST /api/logout`. The role string doubles as the cookie name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogoutRequest {
    pub role: Option<String>,
}

/// Query parameters of `GET /api/get-cookie`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCookieParams {
    pub token_name: Option<String>,
}
