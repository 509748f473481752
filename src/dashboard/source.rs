//! Data sources the list views load their collections from.

use super::{CollectionKind, Record};
use crate::config::Config;
use async_trait::async_trait;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode collection: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies the full, already ordered collection for a list view
#[async_trait]
pub trait CollectionSource<T: Record>: Send + Sync {
    /// Fetch the whole collection
    async fn fetch_collection(&self) -> SourceResult<Vec<T>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// In-memory collection returned after a fixed delay
#[derive(Debug, Clone)]
pub struct MockSource<T: Record> {
    items: Vec<T>,
    latency: Duration,
    failure: Option<String>,
}

impl<T: Record> MockSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            latency: Duration::ZERO,
            failure: None,
        }
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail with a network error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

#[async_trait]
impl<T: Record> CollectionSource<T> for MockSource<T> {
    async fn fetch_collection(&self) -> SourceResult<Vec<T>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.failure {
            Some(message) => Err(SourceError::Network(message.clone())),
            None => Ok(self.items.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("mock ({} items, {:?} latency)", self.items.len(), self.latency)
    }
}

/// Collection stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource<T: Record> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> CollectionSource<T> for JsonFileSource<T> {
    async fn fetch_collection(&self) -> SourceResult<Vec<T>> {
        debug!("Loading collection from: {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            warn!("Failed to read {}: {}", self.path.display(), e);
            SourceError::Network(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Pick the source for `kind`: the data directory when configured, the
/// built-in fixtures otherwise
pub fn open_source<T: Record>(
    config: &Config,
    kind: CollectionKind,
    fixtures: fn() -> Vec<T>,
) -> Box<dyn CollectionSource<T>> {
    match &config.data_dir {
        Some(dir) => Box::new(JsonFileSource::new(
            dir.join(format!("{}.json", kind.file_stem())),
        )),
        None => Box::new(MockSource::new(fixtures()).with_latency(config.latency)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{fixtures, Employee, KnowledgeEntry};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_mock_source_returns_items() {
        let source = MockSource::new(fixtures::employees());
        let items = source.fetch_collection().await.unwrap();
        assert_eq!(items.len(), 12);
        assert_eq!(items[0].name, "Mona Adel");
    }

    #[tokio::test]
    async fn test_mock_source_waits_for_latency() {
        let source =
            MockSource::new(fixtures::employees()).with_latency(Duration::from_millis(50));
        let started = tokio::time::Instant::now();
        source.fetch_collection().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_mock_source_failure() {
        let source = MockSource::new(fixtures::employees()).failing("connection refused");
        let err = source.fetch_collection().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("knowledge.json");
        let entries = fixtures::knowledge_entries();
        std::fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

        let source: JsonFileSource<KnowledgeEntry> = JsonFileSource::new(&path);
        let loaded = source.fetch_collection().await.unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_json_file_source_errors() {
        let dir = tempdir().unwrap();

        let missing: JsonFileSource<Employee> = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(
            missing.fetch_collection().await,
            Err(SourceError::Network(_))
        ));

        let path = dir.path().join("employees.json");
        std::fs::write(&path, "{ not json").unwrap();
        let malformed: JsonFileSource<Employee> = JsonFileSource::new(&path);
        assert!(matches!(
            malformed.fetch_collection().await,
            Err(SourceError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_open_source_prefers_data_dir() {
        let dir = tempdir().unwrap();
        let employees = fixtures::employees();
        std::fs::write(
            dir.path().join("employees.json"),
            serde_json::to_string(&employees[..2]).unwrap(),
        )
        .unwrap();

        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let source = open_source(&config, CollectionKind::Employees, fixtures::employees);
        assert_eq!(source.fetch_collection().await.unwrap().len(), 2);

        let config = Config {
            latency: Duration::ZERO,
            ..Config::default()
        };
        let source = open_source(&config, CollectionKind::Employees, fixtures::employees);
        assert_eq!(source.fetch_collection().await.unwrap().len(), 12);
    }
}
