//! Firmware auto-healer API server.
//!
//! Serves log diagnosis, bug-report triage and source correction over
//! HTTP. Pass a TOML config path as the first argument, or configure
//! through `FH_*` / `OLLAMA_*` environment variables.

use fh_api::config::ApiConfig;
use fh_api::routes;
use fh_api::state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fh-api starting");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading config file");
            ApiConfig::from_file(&path)?
        }
        None => ApiConfig::from_env(),
    };

    if !config.ollama.enabled {
        tracing::warn!("model server disabled, using local summarizer and embedder");
    }

    let state = AppState::from_config(&config).await?;
    tracing::info!(known_issues = state.issues.corpus_len(), "issue corpus ready");

    let app = routes::build_router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
