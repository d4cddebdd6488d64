mod blocking;
mod callback;
mod decomposed;
mod eager;

pub use blocking::read_text_blocking;
pub use callback::read_text_with_callback;
pub use decomposed::{decode, read_text_chained, read_text_nested, read_text_sequential};
pub use eager::{read_text_eager, read_text_logged};

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("failed to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("file content is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
    #[error(transparent)]
    Join(#[from] JoinError),
}
