use crate::retrieval::{RetrievalError, decode};
use std::path::PathBuf;
use tokio::fs;
use tokio::task::JoinHandle;
use tracing::debug;

/// Reads `path` on a spawned task and hands the outcome to `callback`.
///
/// The callback runs exactly once, with either the decoded text or the error. Must be called from within a Tokio
/// runtime.
pub fn read_text_with_callback<F>(path: impl Into<PathBuf>, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<String, RetrievalError>) + Send + 'static,
{
    let path = path.into();
    tokio::spawn(async move {
        debug!(path = %path.display(), "📄 Reading with callback...");
        match fs::read(&path).await {
            Ok(bytes) => callback(decode(bytes)),
            Err(source) => callback(Err(RetrievalError::Io { source, path })),
        }
    })
}
