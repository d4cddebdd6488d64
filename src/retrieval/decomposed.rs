use crate::retrieval::RetrievalError;
use futures::TryFutureExt;
use futures::future;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinHandle;
use tracing::instrument;

#[instrument(skip_all, fields(path = %path.display()))]
pub async fn fetch_bytes(path: &Path) -> Result<Vec<u8>, RetrievalError> {
    fs::read(path).await.map_err(|source| RetrievalError::Io {
        source,
        path: path.to_path_buf(),
    })
}

pub fn decode(bytes: Vec<u8>) -> Result<String, RetrievalError> {
    Ok(String::from_utf8(bytes)?)
}

/// Fetches the raw bytes of `path` on a spawned task and hands them to `callback`.
pub fn fetch_bytes_then<F>(path: impl Into<PathBuf>, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<u8>, RetrievalError>) + Send + 'static,
{
    let path = path.into();
    tokio::spawn(async move { callback(fetch_bytes(&path).await) })
}

pub fn decode_then<F>(bytes: Vec<u8>, callback: F)
where
    F: FnOnce(Result<String, RetrievalError>),
{
    callback(decode(bytes))
}

/// Nests the decode callback inside the fetch callback. A failed fetch goes straight to `callback` without decoding.
pub fn read_text_nested<F>(path: impl Into<PathBuf>, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Result<String, RetrievalError>) + Send + 'static,
{
    fetch_bytes_then(path, move |fetched| match fetched {
        Ok(bytes) => decode_then(bytes, callback),
        Err(err) => callback(Err(err)),
    })
}

/// Chains fetching and decoding as futures. Decoding only runs when fetching succeeded.
pub fn read_text_chained(path: impl Into<PathBuf>) -> impl Future<Output = Result<String, RetrievalError>> {
    let path = path.into();
    async move { fetch_bytes(&path).await }.and_then(|bytes| future::ready(decode(bytes)))
}

pub async fn read_text_sequential(path: &Path) -> Result<String, RetrievalError> {
    let bytes = fetch_bytes(path).await?;
    decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::test_files::{missing_file, temp_file};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use test_log::test;
    use tokio::sync::oneshot;

    #[test]
    fn decode_turns_utf8_bytes_into_text() {
        assert_eq!(decode("héllo".as_bytes().to_vec()).unwrap(), "héllo");
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(matches!(decode(vec![0xc3, 0x28]), Err(RetrievalError::Decode(_))));
    }

    #[test(tokio::test)]
    async fn fetch_bytes_returns_the_raw_content() -> Result<(), RetrievalError> {
        let path = temp_file("decomposed_bytes.bin", &[0x00, 0xff, 0x10]);

        assert_eq!(fetch_bytes(&path).await?, vec![0x00, 0xff, 0x10]);
        Ok(())
    }

    #[test(tokio::test)]
    async fn read_text_nested_yields_the_text() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_file("decomposed_nested.txt", b"hello");
        let (tx, rx) = oneshot::channel();

        read_text_nested(path, move |result| tx.send(result).unwrap()).await?;

        assert_eq!(rx.await??, "hello");
        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_bytes_then_skips_decoding_after_a_failed_fetch() -> Result<(), Box<dyn std::error::Error>> {
        let decoded = Arc::new(AtomicBool::new(false));
        let (tx, rx) = oneshot::channel();

        let decoded_clone = decoded.clone();
        fetch_bytes_then(missing_file("nested"), move |fetched| match fetched {
            Ok(bytes) => decode_then(bytes, |result| {
                decoded_clone.store(true, Ordering::SeqCst);
                tx.send(result).unwrap();
            }),
            Err(err) => tx.send(Err(err)).unwrap(),
        })
        .await?;

        assert!(matches!(rx.await?, Err(RetrievalError::Io { .. })));
        assert!(!decoded.load(Ordering::SeqCst));
        Ok(())
    }

    #[test(tokio::test)]
    async fn read_text_nested_surfaces_a_missing_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = missing_file("nested_missing");
        let (tx, rx) = oneshot::channel();

        read_text_nested(path.clone(), move |result| tx.send(result).unwrap()).await?;

        match rx.await? {
            Err(RetrievalError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected an I/O error, found {:?}", other),
        }
        Ok(())
    }

    #[test(tokio::test)]
    async fn read_text_nested_surfaces_decode_errors() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_file("decomposed_nested_invalid.txt", &[0xff, 0xfe]);
        let (tx, rx) = oneshot::channel();

        read_text_nested(path, move |result| tx.send(result).unwrap()).await?;

        assert!(matches!(rx.await?, Err(RetrievalError::Decode(_))));
        Ok(())
    }

    #[test(tokio::test)]
    async fn read_text_chained_yields_the_text() -> Result<(), RetrievalError> {
        let path = temp_file("decomposed_chained.txt", b"hello");

        assert_eq!(read_text_chained(path).await?, "hello");
        Ok(())
    }

    #[test(tokio::test)]
    async fn read_text_chained_rejects_a_missing_file() {
        let result = read_text_chained(missing_file("chained")).await;

        assert!(matches!(result, Err(RetrievalError::Io { .. })));
    }

    #[test(tokio::test)]
    async fn read_text_sequential_yields_the_text() -> Result<(), RetrievalError> {
        let path = temp_file("decomposed_sequential.txt", b"hello");

        assert_eq!(read_text_sequential(&path).await?, "hello");
        Ok(())
    }

    #[test(tokio::test)]
    async fn read_text_sequential_surfaces_decode_errors() {
        let path = temp_file("decomposed_sequential_invalid.txt", &[0xff]);

        let result = read_text_sequential(&path).await;

        assert!(matches!(result, Err(RetrievalError::Decode(_))));
    }
}
