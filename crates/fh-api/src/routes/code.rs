//! Code correction endpoint.

use axum::Json;
use axum::extract::Multipart;
use fh_log_tools::text::decode_lossy;
use fh_protocol::CodeCorrection;

use crate::error::{ApiError, ApiResult};
use crate::upload::require_file;

/// POST /api/correct-code: scan an uploaded source file and quick-fix it.
pub async fn correct_code(mut multipart: Multipart) -> ApiResult<Json<CodeCorrection>> {
    let upload = require_file(&mut multipart).await?;
    let code = decode_lossy(&upload.bytes);

    // Parsing is CPU-bound; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || fh_code_tools::correct_code(&code))
        .await
        .map_err(|e| ApiError::Internal(format!("scan task failed: {e}")))??;

    tracing::info!(
        filename = %upload.filename,
        issues = report.issues_found,
        "code scanned"
    );

    Ok(Json(report))
}
