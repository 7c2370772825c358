//! Bug-report triage endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use fh_protocol::IssueAnalysis;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for issue triage.
#[derive(Debug, Deserialize)]
pub struct AnalyzeIssueRequest {
    #[serde(default)]
    pub description: Option<String>,
}

/// POST /api/analyze-jira: summarize a report and list similar known issues.
pub async fn analyze_jira(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeIssueRequest>, JsonRejection>,
) -> ApiResult<Json<IssueAnalysis>> {
    let Json(req) = payload?;
    let description = req
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("No description provided".into()))?;

    let analysis = state.issues.analyze(&description).await?;

    tracing::info!(
        chars = description.len(),
        matches = analysis.similar_issues.len(),
        "issue analyzed"
    );

    Ok(Json(analysis))
}
