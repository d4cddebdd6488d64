use crate::retrieval::{RetrievalError, decode};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// Starts reading `path` immediately on a spawned task, like a promise.
///
/// The returned future resolves with the decoded text or the first error. Must be called from within a Tokio
/// runtime.
pub fn read_text_eager(path: impl Into<PathBuf>) -> impl Future<Output = Result<String, RetrievalError>> {
    let path = path.into();
    let handle = tokio::spawn(async move {
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(source) => return Err(RetrievalError::Io { source, path }),
        };
        decode(bytes)
    });

    async move { handle.await? }
}

/// Awaits [`read_text_eager`] and logs the outcome.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn read_text_logged(path: &Path) -> Result<String, RetrievalError> {
    match read_text_eager(path).await {
        Ok(text) => {
            info!(bytes = text.len(), "📄 Reading file... OK");
            Ok(text)
        }
        Err(err) => {
            warn!("📄 Reading file... failed, {}", err);
            Err(err)
        }
    }
}
