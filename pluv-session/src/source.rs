//! Where the readings CSV comes from.

use pluv_core::FetchError;
use std::cell::Cell;
use std::future::Future;
use std::path::PathBuf;

/// A single-shot provider of CSV text.
///
/// The session calls `fetch` at most once per successful session; there is no
/// retry, timeout or cancellation.
pub trait CsvSource {
    fn fetch(&self) -> impl Future<Output = Result<String, FetchError>>;
}

/// Reads the CSV from the local file system.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CsvSource for FileSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| FetchError::Transport(format!("{}: {}", self.path.display(), e)))
    }
}

/// Fixed outcome, handed out on every fetch. Counts how often it was asked.
#[derive(Debug)]
pub struct StaticSource {
    outcome: Result<String, FetchError>,
    fetches: Cell<usize>,
}

impl StaticSource {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            fetches: Cell::new(0),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            fetches: Cell::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl CsvSource for StaticSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        self.outcome.clone()
    }
}

/// Fetches the CSV over HTTP(S).
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "api")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[cfg(feature = "api")]
impl CsvSource for HttpSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_counts_fetches() {
        let source = StaticSource::ok("date,precipitation,notes\n");
        assert_eq!(source.fetch_count(), 0);
        assert!(source.fetch().await.is_ok());
        assert!(source.fetch().await.is_ok());
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let source = FileSource::new("/definitely/not/here/pluviometro.csv");
        match source.fetch().await {
            Err(FetchError::Transport(msg)) => assert!(msg.contains("pluviometro.csv")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
