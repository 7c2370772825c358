//! Log diagnosis endpoint.

use axum::Json;
use axum::extract::Multipart;
use fh_log_tools::classify;
use fh_log_tools::text::decode_lossy;
use fh_protocol::DiagnosisResult;

use crate::error::ApiResult;
use crate::upload::require_file;

/// POST /api/analyze-log: classify an uploaded firmware log.
pub async fn analyze_log(mut multipart: Multipart) -> ApiResult<Json<DiagnosisResult>> {
    let upload = require_file(&mut multipart).await?;
    let result = classify(&decode_lossy(&upload.bytes));

    tracing::info!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        category = %result.category,
        confidence = result.confidence,
        "log analyzed"
    );

    Ok(Json(result))
}
