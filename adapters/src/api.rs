//! Typed client for the Thamer core REST API.
//!
//! `ApiClient` is the single chokepoint for every backend call: it injects
//! the base URL, the default JSON content type and the caller's bearer
//! token, and normalizes failures into [`ApiError`]. There is deliberately
//! no retry, timeout override, caching or de-duplication here; the core API
//! owns consistency and the transport default owns patience.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::ApiError;
use crate::models::{
    ActionUserResponse, AdminUser, Company, CompanyFilter, CompanyStats, CompanyVerdict,
    ForgotPasswordRequest, LoginRequest, MarkReadRequest, MessageResponse, NotificationItem,
    NotificationPage, Paginated, PaymentInitiateResponse, PaymentStatusResponse, PlatformStats,
    RegisterCompanyRequest, ResetPasswordRequest, SignupRequest, TokenResponse,
    UpdateProfileRequest, UserProfile, UserSubscription, VerifyOtpRequest, ViewersPage,
};

/// Classifies a non-success response body. A JSON object carrying a string
/// `detail` field is a backend-authored error and is surfaced verbatim;
/// everything else collapses into a generic network failure.
pub fn classify_error_body(status: StatusCode, body: &[u8]) -> ApiError {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return ApiError::Backend {
                detail: detail.to_string(),
            };
        }
    }
    ApiError::Network {
        message: format!("request failed with status {status}"),
    }
}

/// HTTP client wrapper for the core API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        debug!(%method, path, "core api call");
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(classify_error_body(status, &bytes));
        }
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::network(format!("failed to decode response body: {err}")))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::GET, path, bearer);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path, bearer).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::POST, path, bearer);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PUT, path, bearer).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::DELETE, path, bearer))
            .await
    }

    /// Form-encoded POST, used by the pre-signed-URL endpoints.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut builder = self
            .http
            .request(Method::POST, format!("{}{}", self.base_url, path))
            .form(form);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        self.execute(builder).await
    }

    /// Raw upload to a pre-signed storage URL. Not relative to the base URL.
    pub(crate) async fn put_raw(
        &self,
        url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .put(url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(classify_error_body(status, &body));
        }
        Ok(())
    }

    // --- auth -------------------------------------------------------------

    pub async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.post("/auth/login", None, req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.post("/auth/signup", None, req).await
    }

    pub async fn send_otp(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post_empty("/auth/send-otp", None, &[("email", email.to_string())])
            .await
    }

    pub async fn verify_otp(&self, req: &VerifyOtpRequest) -> Result<TokenResponse, ApiError> {
        self.post("/auth/verify-otp", None, req).await
    }

    pub async fn forgot_password(
        &self,
        req: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/auth/forgot-password", None, req).await
    }

    pub async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/auth/reset-password", None, req).await
    }

    // --- profile ----------------------------------------------------------

    pub async fn me(&self, bearer: &str) -> Result<UserProfile, ApiError> {
        self.get("/me", Some(bearer), &[]).await
    }

    pub async fn update_profile(
        &self,
        bearer: &str,
        req: &UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        self.post("/update-profile", Some(bearer), req).await
    }

    pub async fn update_profile_picture(
        &self,
        bearer: &str,
        key: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.post(
            "/update-profile-picture",
            Some(bearer),
            &serde_json::json!({ "profile_picture": key }),
        )
        .await
    }

    // --- companies (end-user) ----------------------------------------------

    pub async fn register_company(
        &self,
        bearer: &str,
        req: &RegisterCompanyRequest,
    ) -> Result<Company, ApiError> {
        self.post("/register-company", Some(bearer), req).await
    }

    pub async fn user_companies(&self, bearer: &str) -> Result<Vec<Company>, ApiError> {
        self.get("/user/companies", Some(bearer), &[]).await
    }

    pub async fn user_company(&self, bearer: &str, id: i64) -> Result<Company, ApiError> {
        self.get(&format!("/user/companies/{id}"), Some(bearer), &[])
            .await
    }

    pub async fn update_company(
        &self,
        bearer: &str,
        id: i64,
        req: &RegisterCompanyRequest,
    ) -> Result<Company, ApiError> {
        self.put(&format!("/user/companies/{id}"), Some(bearer), req)
            .await
    }

    pub async fn delete_company(&self, bearer: &str, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/user/companies/{id}"), Some(bearer))
            .await
    }

    pub async fn record_company_view(
        &self,
        bearer: &str,
        id: i64,
    ) -> Result<MessageResponse, ApiError> {
        self.post_empty(&format!("/company/{id}/view"), Some(bearer), &[])
            .await
    }

    pub async fn company_viewers(
        &self,
        bearer: &str,
        id: i64,
        page: u64,
        page_size: u64,
    ) -> Result<ViewersPage, ApiError> {
        self.get(
            &format!("/companies/{id}/viewers"),
            Some(bearer),
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn company_view_stats(
        &self,
        bearer: &str,
        id: i64,
    ) -> Result<CompanyStats, ApiError> {
        self.get(&format!("/companies/{id}/views/stats"), Some(bearer), &[])
            .await
    }

    // --- catalogue ----------------------------------------------------------

    pub async fn companies_with_scores(
        &self,
        bearer: &str,
        filter: &CompanyFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<Company>, ApiError> {
        self.get(
            "/companies-with-scores",
            Some(bearer),
            &filter.query_pairs(page, page_size),
        )
        .await
    }

    // --- subscription / payment --------------------------------------------

    pub async fn user_subscription(&self, bearer: &str) -> Result<UserSubscription, ApiError> {
        self.get("/user/subscription", Some(bearer), &[]).await
    }

    pub async fn payment_initiate(
        &self,
        bearer: &str,
        plan_id: u64,
    ) -> Result<PaymentInitiateResponse, ApiError> {
        self.post_empty(
            "/payment/initiate",
            Some(bearer),
            &[("plan_id", plan_id.to_string())],
        )
        .await
    }

    pub async fn payment_status(
        &self,
        bearer: &str,
        order_id: &str,
    ) -> Result<PaymentStatusResponse, ApiError> {
        self.get(
            &format!("/payment/payment/status/{order_id}"),
            Some(bearer),
            &[],
        )
        .await
    }

    // --- notifications ------------------------------------------------------

    pub async fn notifications(
        &self,
        bearer: &str,
        page: u64,
        page_size: u64,
    ) -> Result<NotificationPage, ApiError> {
        self.get(
            "/notifications",
            Some(bearer),
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn notification(&self, bearer: &str, id: i64) -> Result<NotificationItem, ApiError> {
        self.get(&format!("/notifications/{id}"), Some(bearer), &[])
            .await
    }

    pub async fn mark_notifications_read(
        &self,
        bearer: &str,
        req: &MarkReadRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/notifications/mark-read", Some(bearer), req)
            .await
    }

    // --- admin --------------------------------------------------------------

    pub async fn admin_companies(
        &self,
        bearer: &str,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<Company>, ApiError> {
        self.get(
            "/admin/companies",
            Some(bearer),
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn admin_company(&self, bearer: &str, id: i64) -> Result<Company, ApiError> {
        self.get(&format!("/admin/companies/{id}"), Some(bearer), &[])
            .await
    }

    pub async fn validate_company(
        &self,
        bearer: &str,
        id: i64,
        verdict: &CompanyVerdict,
    ) -> Result<MessageResponse, ApiError> {
        let query = match verdict {
            CompanyVerdict::Approved => vec![("status", "approved".to_string())],
            CompanyVerdict::Rejected { reason } => vec![
                ("status", "rejected".to_string()),
                ("rejection_reason", reason.clone()),
            ],
        };
        self.post_empty(&format!("/admin/validate-company/{id}"), Some(bearer), &query)
            .await
    }

    pub async fn admin_users(
        &self,
        bearer: &str,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<AdminUser>, ApiError> {
        self.get(
            "/admin/users",
            Some(bearer),
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn deactivate_user(
        &self,
        bearer: &str,
        id: i64,
    ) -> Result<ActionUserResponse, ApiError> {
        self.delete(&format!("/admin/users/{id}"), Some(bearer))
            .await
    }

    pub async fn restore_user(&self, bearer: &str, id: i64) -> Result<ActionUserResponse, ApiError> {
        self.post_empty(&format!("/admin/users/{id}/restore"), Some(bearer), &[])
            .await
    }

    pub async fn platform_stats(&self, bearer: &str) -> Result<PlatformStats, ApiError> {
        self.get("/stats", Some(bearer), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_detail_body_becomes_backend_error() {
        let err = classify_error_body(StatusCode::BAD_REQUEST, br#"{"detail": "X"}"#);
        match err {
            ApiError::Backend { detail } => assert_eq!(detail, "X"),
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[test]
    fn non_string_detail_is_not_a_backend_error() {
        let err = classify_error_body(StatusCode::BAD_REQUEST, br#"{"detail": 42}"#);
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[test]
    fn empty_body_becomes_network_error() {
        let err = classify_error_body(StatusCode::BAD_GATEWAY, b"");
        match err {
            ApiError::Network { message } => {
                assert!(message.contains("502"), "message was: {message}")
            }
            other => panic!("expected Network error, got {other:?}"),
        }
    }

    #[test]
    fn html_error_page_becomes_network_error() {
        let err = classify_error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            b"<html>Internal Server Error</html>",
        );
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://api.thamer.example/");
        assert_eq!(client.base_url(), "https://api.thamer.example");
    }
}
