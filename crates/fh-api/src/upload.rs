//! Multipart file upload extraction.

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::{ApiError, ApiResult};

/// Name of the multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// An uploaded file held in memory.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Pull the `file` part out of a multipart body.
///
/// Parts without a filename are form values, not files, and are skipped.
pub async fn require_file(multipart: &mut Multipart) -> ApiResult<Upload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(ApiError::BadRequest("Empty filename".into()));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;
        return Ok(Upload { filename, bytes });
    }
    Err(ApiError::BadRequest("No file provided".into()))
}
