//! Dataset sources
//!
//! Where the dataset document comes from: an HTTP endpoint serving the
//! static JSON file, or a file on disk.

use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::SourceConfig;
use crate::dashboard::Dashboard;
use crate::dataset::{Dataset, LoadError, LoadResult};

/// Something a dataset can be fetched from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, for logs
    fn describe(&self) -> String;

    /// Fetch and decode the dataset
    async fn fetch(&self) -> LoadResult<Dataset>;
}

/// Dataset served over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

fn map_request_error(err: reqwest::Error) -> LoadError {
    if err.is_timeout() {
        LoadError::Timeout
    } else if err.is_decode() {
        LoadError::Decode(err.to_string())
    } else {
        LoadError::Network(err.to_string())
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> LoadResult<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await.map_err(map_request_error)?;
        Dataset::from_slice(&body)
    }
}

/// Dataset stored in a local JSON file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> LoadResult<Dataset> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| LoadError::Io {
            path: self.path.clone(),
            error: e.to_string(),
        })?;
        Dataset::from_slice(&bytes)
    }
}

/// Build the source selected by configuration; a file path wins over the URL
pub fn from_config(config: &SourceConfig) -> LoadResult<Box<dyn DatasetSource>> {
    match &config.path {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(HttpSource::new(
            config.url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?)),
    }
}

/// Run one load against `source` and apply it to the dashboard
///
/// Returns whether the result was applied (it is not when a newer load was
/// started in the meantime).
pub async fn load_into(dashboard: &mut Dashboard, source: &dyn DatasetSource) -> bool {
    let ticket = dashboard.begin_load();
    tracing::info!(source = %source.describe(), "Loading dataset");
    let result = source.fetch().await;
    dashboard.complete_load(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::LoadStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SAMPLE: &str = r#"{
        "customers": [{"id": 1, "name": "Alice"}],
        "transactions": [
            {"id": 1, "customer_id": 1, "date": "2024-01-01", "amount": 50},
            {"id": 2, "customer_id": 1, "date": "2024-01-01", "amount": 25}
        ]
    }"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_file_source() {
        let file = write_temp(SAMPLE);
        let dataset = FileSource::new(file.path()).fetch().await.unwrap();

        assert_eq!(dataset.customers.len(), 1);
        assert_eq!(dataset.transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("absent.json"))
            .fetch()
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_into_dashboard() {
        let file = write_temp(SAMPLE);
        let mut dashboard = Dashboard::new();

        assert!(load_into(&mut dashboard, &FileSource::new(file.path())).await);
        assert_eq!(dashboard.status(), &LoadStatus::Loaded);
        assert_eq!(dashboard.customers()[0].transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_dataset() {
        let good = write_temp(SAMPLE);
        let bad = write_temp("{ this is not json");
        let mut dashboard = Dashboard::new();

        load_into(&mut dashboard, &FileSource::new(good.path())).await;
        load_into(&mut dashboard, &FileSource::new(bad.path())).await;

        assert!(matches!(dashboard.last_error(), Some(LoadError::Decode(_))));
        assert_eq!(dashboard.customers().len(), 1);
    }

    /// Serve one canned HTTP response on a local port, returning the dataset URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/sideData.json", addr)
    }

    #[tokio::test]
    async fn test_http_source() {
        let url = serve_once("200 OK", r#"{"customers": [{"id": 1, "name": "Alice"}]}"#).await;
        let source = HttpSource::new(url, Duration::from_secs(5)).unwrap();

        let dataset = source.fetch().await.unwrap();
        assert_eq!(dataset.customers.len(), 1);
        assert!(dataset.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve_once("404 Not Found", "").await;
        let source = HttpSource::new(url.clone(), Duration::from_secs(5)).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert_eq!(err, LoadError::Status { status: 404, url });
    }

    #[tokio::test]
    async fn test_http_malformed_body_keeps_dataset() {
        let good = write_temp(SAMPLE);
        let mut dashboard = Dashboard::new();
        load_into(&mut dashboard, &FileSource::new(good.path())).await;

        let url = serve_once("200 OK", "{bad}").await;
        let source = HttpSource::new(url, Duration::from_secs(5)).unwrap();
        assert!(load_into(&mut dashboard, &source).await);

        assert!(matches!(dashboard.last_error(), Some(LoadError::Decode(_))));
        assert_eq!(dashboard.customers().len(), 1);
        assert_eq!(dashboard.customers()[0].transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_http_source() {
        let source = HttpSource::new("http://127.0.0.1:9/sideData.json", Duration::from_secs(2))
            .unwrap();
        let mut dashboard = Dashboard::new();

        load_into(&mut dashboard, &source).await;

        assert!(dashboard.last_error().is_some());
        assert!(dashboard.customers().is_empty());
    }

    #[test]
    fn test_from_config_prefers_path() {
        let config = SourceConfig {
            path: Some("data/sideData.json".to_string()),
            ..SourceConfig::default()
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.describe(), "data/sideData.json");

        let source = from_config(&SourceConfig::default()).unwrap();
        assert_eq!(source.describe(), SourceConfig::default().url);
    }
}
