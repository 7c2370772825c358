//! Shared test harness for E2E integration tests.
//!
//! Drives the real API router in-process through `tower::oneshot`, with
//! state built the same way the server binary builds it.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fh_api::config::ApiConfig;
use fh_api::routes::build_router;
use fh_api::state::AppState;

const BOUNDARY: &str = "fh-e2e-boundary";

/// In-process API server.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Default config: built-in corpus, no model server.
    pub async fn local() -> Self {
        Self::with_config(ApiConfig::default()).await
    }

    /// Build state and router from `config`, as `main` does.
    pub async fn with_config(config: ApiConfig) -> Self {
        let state = AppState::from_config(&config).await.unwrap();
        let router = build_router(state.clone(), &config);
        Self { state, router }
    }

    /// Upload `content` as the `file` field of a multipart form.
    pub async fn upload(
        &self,
        uri: &str,
        filename: &str,
        content: &[u8],
    ) -> (StatusCode, serde_json::Value) {
        self.send(multipart_request(uri, "file", Some(filename), content))
            .await
    }

    /// POST a JSON body.
    pub async fn post_json(
        &self,
        uri: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Send any request and decode the JSON response.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}

/// Build a single-part multipart request.
///
/// `filename: None` sends a plain form value instead of a file.
pub fn multipart_request(
    uri: &str,
    field: &str,
    filename: Option<&str>,
    content: &[u8],
) -> Request<Body> {
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
