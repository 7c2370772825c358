//! API server configuration, loadable from TOML or environment.

use std::path::PathBuf;

use fh_issue_tools::OllamaConfig;
use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// JSONL file of known issues. The built-in corpus is used when unset
    /// or missing.
    #[serde(default)]
    pub known_issues_path: Option<PathBuf>,
    /// Model server settings for issue triage.
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config from environment variables over the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("FH_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("FH_PORT").and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        if let Some(path) = lookup("FH_KNOWN_ISSUES") {
            config.known_issues_path = Some(PathBuf::from(path));
        }
        if let Some(enabled) = lookup("OLLAMA_ENABLED") {
            config.ollama.enabled = enabled.eq_ignore_ascii_case("true") || enabled == "1";
        }
        if let Some(host) = lookup("OLLAMA_HOST") {
            config.ollama.host = host;
        }
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            max_upload_bytes: default_max_upload_bytes(),
            known_issues_path: None,
            ollama: OllamaConfig::default(),
        }
    }
}
