use crate::retrieval::{RetrievalError, decode};
use std::fs;
use std::path::Path;
use tracing::{instrument, warn};

/// Reads `path` on the calling thread. Failures are logged and yield an empty string.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_text_blocking(path: &Path) -> String {
    let text = fs::read(path)
        .map_err(|source| RetrievalError::Io {
            source,
            path: path.to_path_buf(),
        })
        .and_then(decode);

    match text {
        Ok(text) => text,
        Err(err) => {
            warn!("⚠️ {}", err);
            String::new()
        }
    }
}
