//! Pre-signed-URL file uploads to object storage.
//!
//! The flow is two-step and mirrors the core API's contract: ask the core
//! API for a pre-signed URL (form-encoded `file_name`/`file_type`, bearer
//! auth), then PUT the raw bytes straight to storage with the file's own
//! content type. Validation happens before any network call; an oversized
//! or mistyped file never leaves the process.

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::errors::{ApiError, UploadError};
use crate::models::PresignedUrl;

/// Hard cap applied to every upload before the presign request is made.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DOCUMENT_TYPES: &[&str] = &["application/pdf", "image/png", "image/jpeg"];
const PICTURE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// Which presign endpoint a file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Score certificates, CR documents, company files.
    Document,
    /// User avatars.
    ProfilePicture,
}

impl UploadKind {
    fn presign_path(self) -> &'static str {
        match self {
            UploadKind::Document => "/generate-presigned-url",
            UploadKind::ProfilePicture => "/generate-profile-picture-presigned-url",
        }
    }

    fn allowed_types(self) -> &'static [&'static str] {
        match self {
            UploadKind::Document => DOCUMENT_TYPES,
            UploadKind::ProfilePicture => PICTURE_TYPES,
        }
    }
}

/// A file staged for upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Validates a staged file against the per-kind policy.
pub fn validate(file: &UploadFile, kind: UploadKind) -> Result<(), UploadError> {
    if file.name.trim().is_empty() {
        return Err(UploadError::MissingName);
    }
    if file.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size: file.bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }
    if !kind.allowed_types().contains(&file.content_type.as_str()) {
        return Err(UploadError::UnsupportedType {
            content_type: file.content_type.clone(),
        });
    }
    Ok(())
}

/// Drives the two-step upload against a given [`ApiClient`].
#[derive(Clone, Debug)]
pub struct Uploader {
    client: ApiClient,
}

impl Uploader {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Requests a pre-signed URL for the file and PUTs the bytes to it.
    /// Returns the storage URL and object key the core API handed out.
    ///
    /// The caller is expected to have run [`validate`] first; this method
    /// re-checks so no path around the policy exists.
    pub async fn upload(
        &self,
        bearer: &str,
        file: UploadFile,
        kind: UploadKind,
    ) -> Result<PresignedUrl, UploadOutcomeError> {
        validate(&file, kind).map_err(UploadOutcomeError::Rejected)?;

        let presigned: PresignedUrl = self
            .client
            .post_form(
                kind.presign_path(),
                Some(bearer),
                &[
                    ("file_name", file.name.as_str()),
                    ("file_type", file.content_type.as_str()),
                ],
            )
            .await
            .map_err(UploadOutcomeError::Api)?;

        self.client
            .put_raw(&presigned.url, &file.content_type, file.bytes)
            .await
            .map_err(UploadOutcomeError::Api)?;

        Ok(presigned)
    }
}

/// Either the file never left the process, or the transfer itself failed.
#[derive(Debug, thiserror::Error)]
pub enum UploadOutcomeError {
    #[error(transparent)]
    Rejected(UploadError),
    #[error(transparent)]
    Api(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(bytes: usize) -> UploadFile {
        UploadFile {
            name: "iktva-certificate.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; bytes],
        }
    }

    #[test]
    fn accepts_a_small_pdf_document() {
        assert!(validate(&pdf(1024), UploadKind::Document).is_ok());
    }

    #[test]
    fn rejects_oversized_files_before_any_network_call() {
        let err = validate(&pdf(MAX_UPLOAD_BYTES + 1), UploadKind::Document).unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { .. }));
    }

    #[test]
    fn rejects_pdf_as_profile_picture() {
        let err = validate(&pdf(10), UploadKind::ProfilePicture).unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedType {
                content_type: "application/pdf".to_string()
            }
        );
    }

    #[test]
    fn rejects_nameless_files() {
        let mut file = pdf(10);
        file.name = "  ".to_string();
        assert_eq!(
            validate(&file, UploadKind::Document).unwrap_err(),
            UploadError::MissingName
        );
    }

    #[test]
    fn presign_paths_match_the_core_api() {
        assert_eq!(UploadKind::Document.presign_path(), "/generate-presigned-url");
        assert_eq!(
            UploadKind::ProfilePicture.presign_path(),
            "/generate-profile-picture-presigned-url"
        );
    }
}
