//! Handlers for file uploads.
//!
//! Files arrive as base64 in a JSON body and leave through the two-step
//! pre-signed flow in `adapters::storage`. Validation (size cap, content
//! type) happens before the presign request; rejected files produce a 400
//! and no upstream traffic.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use adapters::models::PresignedUrl;
use adapters::storage::UploadFile;
use adapters::UploadKind;

use crate::auth::TokenRole;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: String,
    /// Raw file bytes, base64-encoded.
    pub data: String,
}

impl UploadRequest {
    fn into_file(self) -> Result<UploadFile, AppError> {
        let bytes = STANDARD
            .decode(self.data.as_bytes())
            .map_err(|err| AppError::BadRequest(format!("file data is not base64: {err}")))?;
        Ok(UploadFile {
            name: self.file_name,
            content_type: self.content_type,
            bytes,
        })
    }
}

async fn upload(
    state: &AppState,
    jar: &CookieJar,
    req: UploadRequest,
    kind: UploadKind,
) -> Result<Json<PresignedUrl>, AppError> {
    let bearer = state.core.bearer(jar, TokenRole::User)?;
    let file = req.into_file()?;
    Ok(Json(state.core.uploader().upload(&bearer, file, kind).await?))
}

pub async fn document(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<UploadRequest>,
) -> Result<Json<PresignedUrl>, AppError> {
    upload(&state, &jar, req, UploadKind::Document).await
}

pub async fn profile_picture(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<UploadRequest>,
) -> Result<Json<PresignedUrl>, AppError> {
    upload(&state, &jar, req, UploadKind::ProfilePicture).await
}
