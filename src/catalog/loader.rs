//! TLD catalog loading over HTTP or from a local file

use super::{parse_catalog, CatalogSource, RawCatalog, TldCatalog};
use crate::error::{Result, TldifyError};
use crate::types::CatalogConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::LAST_MODIFIED;
use reqwest::Client;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::time::{sleep, timeout};

/// Fetches the TLD list with a plain HTTP GET
pub struct HttpCatalogSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, request_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("tldify/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self {
            client,
            url: url.into(),
            timeout: request_timeout,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<RawCatalog> {
        let url = self.url.clone();
        let secs = self.timeout.as_secs();

        let response = timeout(self.timeout, self.client.get(&url).send())
            .await
            .map_err(|_| TldifyError::timeout("TLD catalog request", secs))?
            .map_err(|e| TldifyError::catalog_unavailable(e.to_string(), None, Some(url.clone())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TldifyError::catalog_unavailable(
                format!("TLD catalog request failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = timeout(self.timeout, response.text())
            .await
            .map_err(|_| TldifyError::timeout("TLD catalog body", secs))?
            .map_err(|e| TldifyError::catalog_unavailable(e.to_string(), Some(status.as_u16()), Some(url.clone())))?;

        Ok(RawCatalog {
            body,
            last_modified,
            origin: url,
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the TLD list from disk (offline use)
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<RawCatalog> {
        let path_str = self.path.to_string_lossy().to_string();

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TldifyError::io(e.to_string(), Some(path_str.clone())))?;

        // The file's mtime stands in for the Last-Modified header
        let last_modified = tokio::fs::metadata(&self.path)
            .await
            .and_then(|m| m.modified())
            .map(|t| http_date(DateTime::<Utc>::from(t)))
            .unwrap_or_default();

        Ok(RawCatalog {
            body,
            last_modified,
            origin: path_str,
        })
    }

    fn describe(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

fn http_date(t: DateTime<Utc>) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Loads a [`TldCatalog`] from a source with bounded retry
pub struct CatalogLoader {
    source: Box<dyn CatalogSource>,
    retry_attempts: usize,
    retry_delay: Duration,
}

impl CatalogLoader {
    /// Create a loader with custom source and no retries
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source,
            retry_attempts: 0,
            retry_delay: Duration::ZERO,
        }
    }

    /// Create a loader from configuration. A configured file wins over the URL.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let source: Box<dyn CatalogSource> = match &config.file {
            Some(path) => Box::new(FileCatalogSource::new(path.clone())),
            None => Box::new(HttpCatalogSource::new(config.url.clone(), config.timeout)),
        };

        Self::new(source).with_retry(config.retry_attempts, config.retry_delay)
    }

    pub fn with_retry(mut self, attempts: usize, delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay = delay;
        self
    }

    pub fn source(&self) -> String {
        self.source.describe()
    }

    /// Fetch and parse the catalog, retrying up to `retry_attempts` extra times.
    ///
    /// Every failure is reported as [`TldifyError::CatalogUnavailable`].
    pub async fn load(&self) -> Result<TldCatalog> {
        let start = Instant::now();
        let mut attempt = 0;

        loop {
            match self.source.fetch().await {
                Ok(raw) => {
                    let catalog = parse_catalog(&raw.body, raw.last_modified).with_source(raw.origin);
                    tracing::info!(
                        source = %catalog.source(),
                        tlds = %catalog.len(),
                        attempts = %(attempt + 1),
                        duration_ms = %start.elapsed().as_millis(),
                        "TLD catalog loaded"
                    );
                    return Ok(catalog);
                }
                Err(e) if attempt < self.retry_attempts => {
                    attempt += 1;
                    let delay = self.retry_delay * attempt as u32;
                    tracing::warn!(
                        source = %self.source.describe(),
                        attempt = %attempt,
                        delay_ms = %delay.as_millis(),
                        error = %e,
                        "TLD catalog fetch failed, retrying"
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(into_unavailable(e, self.source.describe())),
            }
        }
    }

    /// Load the catalog, falling back to an empty one on failure
    pub async fn load_or_empty(&self) -> (TldCatalog, Option<TldifyError>) {
        match self.load().await {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::warn!(source = %self.source.describe(), error = %e, "Continuing with empty TLD catalog");
                (TldCatalog::empty().with_source(self.source.describe()), Some(e))
            }
        }
    }
}

fn into_unavailable(err: TldifyError, origin: String) -> TldifyError {
    match err {
        e @ TldifyError::CatalogUnavailable { .. } => e,
        other => TldifyError::catalog_unavailable(other.to_string(), None, Some(origin)),
    }
}
