//! Wire-format data models for the Thamer core API.
//!
//! Every struct mirrors the JSON the core API actually speaks (snake_case
//! field names, ISO-8601 date strings). The gateway treats scores, payments
//! and subscription records as opaque data to render or forward; no scoring
//! or settlement logic lives on this side of the wire.

use serde::{Deserialize, Serialize};

/// Reference to a stored file (logo, score certificate, profile picture).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FileRef {
    pub key: Option<String>,
    pub url: Option<String>,
}

/// A single IKTVA/Local score entry attached to a company. The numeric
/// value is opaque to the gateway.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Score {
    pub id: i64,
    pub year: i32,
    pub score: f64,
    pub score_type: String,
    #[serde(default)]
    pub file: FileRef,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub cr: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub logo: Option<FileRef>,
    pub awards: Option<Vec<String>>,
    pub sectors: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub scores: Vec<Score>,
    pub rejection_reason: Option<String>,
}

/// Paged listing envelope used by the catalogue and the admin listings.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// Catalogue filter set. Unset fields are omitted from the query string;
/// set fields are forwarded verbatim and URL-encoded by the transport.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CompanyFilter {
    pub company_name: Option<String>,
    pub score_type: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub sectors: Option<String>,
}

impl CompanyFilter {
    /// Builds the query pairs for `companies-with-scores`, pagination first,
    /// then whichever filters are set, in a stable order.
    pub fn query_pairs(&self, page: u64, page_size: u64) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(name) = &self.company_name {
            pairs.push(("company_name", name.clone()));
        }
        if let Some(score_type) = &self.score_type {
            pairs.push(("score_type", score_type.clone()));
        }
        if let Some(min_year) = &self.min_year {
            pairs.push(("min_year", min_year.clone()));
        }
        if let Some(max_year) = &self.max_year {
            pairs.push(("max_year", max_year.clone()));
        }
        if let Some(sectors) = &self.sectors {
            pairs.push(("sectors", sectors.clone()));
        }
        pairs
    }
}

// --- auth -----------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_name: Option<String>,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Successful login / OTP verification. The bearer token inside is what the
/// gateway stores under the role cookie.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Generic `{message}` acknowledgement used by several auth endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

// --- profile --------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub company_name: Option<String>,
    pub profile_picture: Option<String>,
    pub last_login: Option<String>,
    pub last_login_ip: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub company_name: Option<String>,
}

// --- companies ------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RegisterCompanyRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub cr: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub logo: Option<FileRef>,
    pub awards: Option<Vec<String>>,
    pub sectors: Option<Vec<String>>,
    pub scores: Option<Vec<ScoreInput>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoreInput {
    pub year: i32,
    pub score: f64,
    pub score_type: String,
    pub file: Option<FileRef>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompanyStats {
    pub total_views: u64,
    pub views_last_7_days: u64,
    pub views_last_30_days: u64,
    pub anonymous_views: u64,
    pub authenticated_views: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Viewer {
    pub viewer_id: i64,
    pub viewer_name: String,
    pub viewer_email: String,
    pub viewed_at: String,
    pub profile_picture: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ViewersPage {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    #[serde(default)]
    pub total_pages: Option<u64>,
    pub data: Vec<Viewer>,
}

// --- subscription / payment ----------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubscriptionData {
    pub id: String,
    pub plan_name: String,
    pub plan_price: f64,
    pub duration_days: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub amount_paid: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PaymentData {
    pub order_id: Option<String>,
    pub status: Option<String>,
    pub trans_id: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub transaction_date: Option<String>,
    pub failure_reason: Option<String>,
}

/// The pair the core API returns for `/user/subscription`. Either half can
/// be null for users who never paid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSubscription {
    pub subscription: Option<SubscriptionData>,
    pub payment: Option<PaymentData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentInitiateResponse {
    pub message: String,
    pub order_id: String,
    pub redirect_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentStatusResponse {
    pub status: String,
    pub payment_status: PaymentStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentStatus {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    #[serde(rename = "responseBody")]
    pub response_body: serde_json::Value,
}

// --- notifications --------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    General,
    Comment,
    Message,
    System,
    View,
    Alert,
    Follow,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Sender {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationItem {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default)]
    pub sender: Option<Sender>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotificationPage {
    pub total: u64,
    pub unread_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub items: Vec<NotificationItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarkReadRequest {
    pub notification_ids: Vec<i64>,
}

// --- admin ----------------------------------------------------------------

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionedUser {
    pub id: i64,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionUserResponse {
    pub message: String,
    pub user: ActionedUser,
}

/// Moderation verdict for a pending company registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyVerdict {
    Approved,
    Rejected { reason: String },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlatformStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub pending_companies: u64,
    #[serde(default)]
    pub active_subscriptions: u64,
}

// --- uploads --------------------------------------------------------------

/// Pre-signed URL handed out by the core API; `url` is where the raw bytes
/// go, `key` is the stored object's identity.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PresignedUrl {
    pub url: String,
    pub key: String,
}
