//! Handlers for the signed-in user's notification feed.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use adapters::models::{MarkReadRequest, MessageResponse, NotificationItem, NotificationPage};

use crate::api::companies::handlers::PageParams;
use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::AppState;

pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<PageParams>,
) -> Result<Json<NotificationPage>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state
            .core
            .client()
            .notifications(&bearer, params.page(), params.page_size_or(10))
            .await?,
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<NotificationItem>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().notification(&bearer, id).await?))
}

pub async fn mark_read(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<MarkReadRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state
            .core
            .client()
            .mark_notifications_read(&bearer, &req)
            .await?,
    ))
}
