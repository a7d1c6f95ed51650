//! Handlers for authentication flows and the signed-in user's profile.
//!
//! Login and OTP verification are the two places a bearer token enters the
//! system: the core API's `access_token` is written straight into the
//! role-scoped cookie on the way back to the browser.

use axum::extract::{Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use adapters::models::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest, SignupRequest,
    TokenResponse, UpdateProfileRequest, UserProfile, VerifyOtpRequest,
};

use crate::auth::handlers::bearer_cookie;
use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::AppState;

async fn login_as(
    state: &AppState,
    jar: CookieJar,
    req: &LoginRequest,
    role: TokenRole,
) -> Result<(CookieJar, Json<TokenResponse>), AppError> {
    let token = state.core.client().login(req).await?;
    let jar = jar.add(bearer_cookie(
        role.cookie_name(),
        token.access_token.clone(),
        state.config.secure_cookies,
    ));
    Ok((jar, Json(token)))
}

/// `POST /api/auth/login` — end-user login; stores under `userToken`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), AppError> {
    login_as(&state, jar, &req, TokenRole::User).await
}

/// `POST /api/auth/admin/login` — same upstream call, stored under
/// `adminToken` so both sessions can coexist.
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), AppError> {
    login_as(&state, jar, &req, TokenRole::Admin).await
}

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.core.client().signup(&req).await?))
}

#[derive(Debug, Deserialize)]
pub struct SendOtpParams {
    pub email: String,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Query(params): Query<SendOtpParams>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.core.client().send_otp(&params.email).await?))
}

/// `POST /api/auth/verify-otp` — successful verification also yields a
/// bearer token, stored like a login.
pub async fn verify_otp(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), AppError> {
    let token = state.core.client().verify_otp(&req).await?;
    let jar = jar.add(bearer_cookie(
        TokenRole::User.cookie_name(),
        token.access_token.clone(),
        state.config.secure_cookies,
    ));
    Ok((jar, Json(token)))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.core.client().forgot_password(&req).await?))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.core.client().reset_password(&req).await?))
}

pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<UserProfile>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().me(&bearer).await?))
}

pub async fn update_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().update_profile(&bearer, &req).await?))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePictureRequest {
    /// Object key returned by the profile-picture upload.
    pub key: String,
}

pub async fn update_profile_picture(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<UpdatePictureRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state
            .core
            .client()
            .update_profile_picture(&bearer, &req.key)
            .await?,
    ))
}
