//! Ollama-backed summarizer and embedder.
//!
//! Calls a model server's HTTP API: `/api/generate` for summaries and
//! `/api/embed` for vectors. Failures are returned as `IssueError::Model`
//! so callers can fall back to the local tier.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::embedder::Embedder;
use crate::error::{IssueError, IssueResult};
use crate::summarizer::Summarizer;

/// Upper bound on generated summary length, in tokens.
const SUMMARY_MAX_TOKENS: u32 = 80;

/// Configuration for the Ollama endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model used for summaries.
    #[serde(default = "default_summary_model")]
    pub summary_model: String,
    /// Model used for embeddings.
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Whether model-backed triage is enabled.
    #[serde(default)]
    pub enabled: bool,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_summary_model() -> String {
    "flan-t5".into()
}
fn default_embedding_model() -> String {
    "all-minilm".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            summary_model: default_summary_model(),
            embedding_model: default_embedding_model(),
            timeout_secs: default_timeout_secs(),
            enabled: false,
        }
    }
}

fn build_client(config: &OllamaConfig) -> IssueResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| IssueError::Model(format!("failed to build HTTP client: {e}")))
}

async fn post_json<B, R>(client: &reqwest::Client, url: &str, body: &B) -> IssueResult<R>
where
    B: Serialize + Sync,
    R: for<'de> Deserialize<'de>,
{
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| IssueError::Model(format!("request to {url} failed: {e}")))?;

    if !response.status().is_success() {
        return Err(IssueError::Model(format!(
            "{url} returned {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| IssueError::Model(format!("invalid response from {url}: {e}")))
}

// ── Summarizer ────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Summarizer backed by Ollama's generate endpoint.
pub struct OllamaSummarizer {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaSummarizer {
    pub fn new(config: OllamaConfig) -> IssueResult<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
        })
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn summarize(&self, text: &str) -> IssueResult<String> {
        let url = format!("{}/api/generate", self.config.host);
        let body = GenerateRequest {
            model: &self.config.summary_model,
            prompt: format!("summarize: {text}"),
            stream: false,
            options: GenerateOptions {
                num_predict: SUMMARY_MAX_TOKENS,
            },
        };

        let resp: GenerateResponse = post_json(&self.client, &url, &body).await?;
        let summary = resp.response.trim();
        if summary.is_empty() {
            return Err(IssueError::Model("model returned an empty summary".into()));
        }
        Ok(summary.to_string())
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

// ── Embedder ──────────────────────────────────────────────────

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Embedder backed by Ollama's embed endpoint.
pub struct OllamaEmbedder {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaEmbedder {
    pub fn new(config: OllamaConfig) -> IssueResult<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
        })
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed(&self, texts: &[String]) -> IssueResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/embed", self.config.host);
        let body = EmbedRequest {
            model: &self.config.embedding_model,
            input: texts,
        };

        let resp: EmbedResponse = post_json(&self.client, &url, &body).await?;
        if resp.embeddings.len() != texts.len() {
            return Err(IssueError::Model(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                resp.embeddings.len()
            )));
        }
        Ok(resp.embeddings)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
