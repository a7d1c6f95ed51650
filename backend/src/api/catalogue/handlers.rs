//! Handlers for the paid company catalogue.
//!
//! Catalogue access is the one place the gateway evaluates a business rule
//! itself: the user's subscription must be active (settled payment, future
//! end date) before the filter query is forwarded to the core API. The
//! filter values themselves pass through verbatim.

use axum::extract::{Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use adapters::models::{Company, CompanyFilter, Paginated, UserSubscription};

use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::services::subscription;
use crate::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct CatalogueParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub company_name: Option<String>,
    pub score_type: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub sectors: Option<String>,
}

impl CatalogueParams {
    fn filter(&self) -> CompanyFilter {
        CompanyFilter {
            company_name: self.company_name.clone().filter(|name| !name.is_empty()),
            score_type: self.score_type.clone(),
            min_year: self.min_year.clone(),
            max_year: self.max_year.clone(),
            sectors: self.sectors.clone(),
        }
    }
}

/// `GET /api/companies-with-scores` — subscription-gated catalogue search.
pub async fn search(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CatalogueParams>,
) -> Result<Json<Paginated<Company>>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;

    let record = state.core.client().user_subscription(&bearer).await?;
    if !subscription::is_active(&record, Utc::now()) {
        return Err(AppError::SubscriptionRequired);
    }

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(10);
    Ok(Json(
        state
            .core
            .client()
            .companies_with_scores(&bearer, &params.filter(), page, page_size)
            .await?,
    ))
}

/// `GET /api/user/subscription` — the raw subscription/payment pair, for
/// surfaces that render plan state instead of gating on it.
pub async fn user_subscription(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<UserSubscription>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(state.core.client().user_subscription(&bearer).await?))
}
