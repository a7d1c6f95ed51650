//! Handlers for the admin portal.
//!
//! Everything here requires the `adminToken` cookie. Moderation verdicts
//! are validated at the edge: a rejection without a reason never reaches
//! the core API.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use adapters::models::{
    ActionUserResponse, AdminUser, Company, CompanyVerdict, MessageResponse, Paginated,
    PlatformStats,
};

use crate::api::companies::handlers::PageParams;
use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::AppState;

pub async fn list_companies(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<PageParams>,
) -> Result<Json<Paginated<Company>>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    Ok(Json(
        state
            .core
            .client()
            .admin_companies(&bearer, params.page(), params.page_size_or(10))
            .await?,
    ))
}

pub async fn company_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<Company>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    Ok(Json(state.core.client().admin_company(&bearer, id).await?))
}

#[derive(Debug, Deserialize)]
pub struct VerdictParams {
    pub status: String,
    pub rejection_reason: Option<String>,
}

impl VerdictParams {
    fn verdict(&self) -> Result<CompanyVerdict, AppError> {
        match self.status.as_str() {
            "approved" => Ok(CompanyVerdict::Approved),
            "rejected" => {
                let reason = self
                    .rejection_reason
                    .clone()
                    .filter(|reason| !reason.trim().is_empty())
                    .ok_or_else(|| {
                        AppError::BadRequest("a rejection reason is required".to_string())
                    })?;
                Ok(CompanyVerdict::Rejected { reason })
            }
            other => Err(AppError::BadRequest(format!(
                "unknown validation status: {other}"
            ))),
        }
    }
}

/// `POST /api/admin/validate-company/:id?status=approved|rejected`.
pub async fn validate_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    Query(params): Query<VerdictParams>,
) -> Result<Json<MessageResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    let verdict = params.verdict()?;
    Ok(Json(
        state
            .core
            .client()
            .validate_company(&bearer, id, &verdict)
            .await?,
    ))
}

pub async fn list_users(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<PageParams>,
) -> Result<Json<Paginated<AdminUser>>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    Ok(Json(
        state
            .core
            .client()
            .admin_users(&bearer, params.page(), params.page_size_or(10))
            .await?,
    ))
}

pub async fn deactivate_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<ActionUserResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    Ok(Json(state.core.client().deactivate_user(&bearer, id).await?))
}

pub async fn restore_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<Json<ActionUserResponse>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    Ok(Json(state.core.client().restore_user(&bearer, id).await?))
}

pub async fn stats(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<PlatformStats>, AppError> {
    let bearer = state.core.bearer(&jar, TokenRole::Admin)?;
    Ok(Json(state.core.client().platform_stats(&bearer).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_verdict_parses() {
        let params = VerdictParams {
            status: "approved".to_string(),
            rejection_reason: None,
        };
        assert_eq!(params.verdict().unwrap(), CompanyVerdict::Approved);
    }

    #[test]
    fn rejection_requires_a_reason() {
        let params = VerdictParams {
            status: "rejected".to_string(),
            rejection_reason: Some("   ".to_string()),
        };
        assert!(params.verdict().is_err());
    }

    #[test]
    fn rejection_with_reason_parses() {
        let params = VerdictParams {
            status: "rejected".to_string(),
            rejection_reason: Some("missing CR document".to_string()),
        };
        assert_eq!(
            params.verdict().unwrap(),
            CompanyVerdict::Rejected {
                reason: "missing CR document".to_string()
            }
        );
    }

    #[test]
    fn unknown_status_is_rejected_at_the_edge() {
        let params = VerdictParams {
            status: "maybe".to_string(),
            rejection_reason: None,
        };
        assert!(params.verdict().is_err());
    }
}
