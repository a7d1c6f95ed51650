//! Handlers for the signed-in user's companies.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use adapters::models::{
    Company, CompanyStats, MessageResponse, RegisterCompanyRequest, ViewersPage,
};

use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PageParams {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    pub fn page_size_or(&self, default: u64) -> u64 {
        self.page_size.unwrap_or(default)
    }
}

pub async fn register_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterCompanyRequest>,
) -> Result<Json<Company>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state.core.client().register_company(&bearer, &req).await?,
    ))
}

pub async fn list_companies(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Vec<Company>>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().user_companies(&bearer).await?))
}

pub async fn get_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<Company>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().user_company(&bearer, id).await?))
}

pub async fn update_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    Json(req): Json<RegisterCompanyRequest>,
) -> Result<Json<Company>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state.core.client().update_company(&bearer, id, &req).await?,
    ))
}

pub async fn delete_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().delete_company(&bearer, id).await?))
}

/// Records one catalogue view of a company on behalf of the viewer.
pub async fn record_view(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state.core.client().record_company_view(&bearer, id).await?,
    ))
}

pub async fn viewers(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<Json<ViewersPage>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state
            .core
            .client()
            .company_viewers(&bearer, id, params.page(), params.page_size_or(20))
            .await?,
    ))
}

pub async fn view_stats(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<CompanyStats>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state.core.client().company_view_stats(&bearer, id).await?,
    ))
}
