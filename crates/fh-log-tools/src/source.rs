//! Log source abstraction: read log text from files, mocks, or uploads.

use async_trait::async_trait;

use crate::error::{LogError, LogResult};
use crate::text::decode_lossy;

/// Abstraction for fetching raw log text.
///
/// Decoding is always best-effort: invalid UTF-8 is dropped, never
/// reported. Only a missing or unreadable source is an error.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Read the whole log identified by `path`.
    async fn read_text(&self, path: &str) -> LogResult<String>;
}

/// Reads logs from the local filesystem.
pub struct FileLogSource;

#[async_trait]
impl LogSource for FileLogSource {
    async fn read_text(&self, path: &str) -> LogResult<String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogError::NotFound(path.to_string())
            } else {
                LogError::Io(format!("{path}: {e}"))
            }
        })?;
        Ok(decode_lossy(&bytes))
    }
}
