//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health: service is up and the issue corpus is loaded.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "fh-api",
        "version": env!("CARGO_PKG_VERSION"),
        "knownIssues": state.issues.corpus_len(),
    }))
}
