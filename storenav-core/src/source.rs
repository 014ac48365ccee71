// Where layout documents come from: local files or HTTP endpoints

use crate::error::{CoreError, Result};
use crate::layout::{LayoutDocument, parse_document};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(Url),
}

impl DocumentSource {
    /// Pick a source from CLI-style arguments; the file wins if both are set.
    pub fn from_args(url: Option<&Url>, file: Option<&PathBuf>) -> Result<Self> {
        if let Some(file) = file {
            Ok(DocumentSource::File(file.clone()))
        } else if let Some(url) = url {
            Ok(DocumentSource::Url(url.clone()))
        } else {
            Err(CoreError::InvalidDocument(
                "Either --url or --file must be provided".to_string(),
            ))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Url(url) => url.to_string(),
        }
    }
}

/// Read a document from disk, expanding a leading `~`.
pub fn read_document_file(path: &Path) -> Result<String> {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let content = fs::read_to_string(&expanded).map_err(|e| {
        CoreError::InvalidDocument(format!("Failed to read {}: {}", expanded, e))
    })?;
    debug!("Read {} bytes from {}", content.len(), expanded);
    Ok(content)
}

pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("storenav/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-success statuses are errors.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        info!("Fetching document from {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    pub async fn load(&self, source: &DocumentSource) -> Result<LayoutDocument> {
        let body = match source {
            DocumentSource::File(path) => read_document_file(path)?,
            DocumentSource::Url(url) => self.fetch(url).await?,
        };
        parse_document(&body)
    }
}

/// Load and parse a layout document from `source`.
pub async fn load_document(source: &DocumentSource) -> Result<LayoutDocument> {
    DocumentFetcher::new()?.load(source).await
}
