//! Handlers for subscription payments.
//!
//! The gateway never settles anything; it asks the core API to open a
//! checkout session and later polls the order's status. The browser follows
//! the returned `redirect_url` to the payment provider.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use adapters::models::{PaymentInitiateResponse, PaymentStatusResponse};

use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::AppState;

const DEFAULT_PLAN_ID: u64 = 2;

#[derive(Debug, Deserialize)]
pub struct InitiateParams {
    pub plan_id: Option<u64>,
}

pub async fn initiate(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<InitiateParams>,
) -> Result<Json<PaymentInitiateResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    let plan_id = params.plan_id.unwrap_or(DEFAULT_PLAN_ID);
    Ok(Json(
        state.core.client().payment_initiate(&bearer, plan_id).await?,
    ))
}

pub async fn status(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(order_id): Path<String>,
) -> Result<Json<PaymentStatusResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::User)?;
    Ok(Json(
        state.core.client().payment_status(&bearer, &order_id).await?,
    ))
}
