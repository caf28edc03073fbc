//! Template sources.
//!
//! A [`SourceFetcher`] turns a manifest source path into raw bytes. Two
//! variants exist: a local template tree (development, offline runs) and a
//! remote base URL serving the same tree over plain HTTP GET.

use crate::error::{PrimerError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Where templates are fetched from when no local tree is given.
pub const DEFAULT_TEMPLATE_BASE_URL: &str =
    "https://raw.githubusercontent.com/orchard9/primer-templates/main";

pub trait SourceFetcher {
    /// Fetch the raw bytes for a manifest source path.
    fn fetch(&self, source: &str) -> Result<Vec<u8>>;
}

// ---------------------------------------------------------------------------
// LocalFetcher
// ---------------------------------------------------------------------------

/// Reads templates from a local directory tree.
pub struct LocalFetcher {
    template_root: PathBuf,
}

impl LocalFetcher {
    pub fn new(template_root: impl Into<PathBuf>) -> Self {
        Self {
            template_root: template_root.into(),
        }
    }
}

impl SourceFetcher for LocalFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let path = self.template_root.join(source);
        std::fs::read(&path).map_err(|e| PrimerError::Materialization {
            source: source.to_string(),
            cause: format!("read {}: {e}", path.display()),
        })
    }
}

// ---------------------------------------------------------------------------
// RemoteFetcher
// ---------------------------------------------------------------------------

/// Downloads templates from `base_url`/`source` with blocking GETs.
pub struct RemoteFetcher {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { base_url, client }
    }

    fn url_for(&self, source: &str) -> String {
        format!("{}/{}", self.base_url, source)
    }
}

impl SourceFetcher for RemoteFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let url = self.url_for(source);
        let wrap = |cause: String| PrimerError::Materialization {
            source: source.to_string(),
            cause,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| wrap(format!("GET {url}: {e}")))?;
        if !response.status().is_success() {
            return Err(wrap(format!("GET {url}: HTTP {}", response.status())));
        }
        let bytes = response
            .bytes()
            .map_err(|e| wrap(format!("GET {url}: {e}")))?;
        Ok(bytes.to_vec())
    }
}

/// Fetcher backed by a plain fn, for tests.
#[cfg(test)]
pub(crate) struct FnFetcher<F: Fn(&str) -> Result<Vec<u8>>>(pub F);

#[cfg(test)]
impl<F: Fn(&str) -> Result<Vec<u8>>> SourceFetcher for FnFetcher<F> {
    fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        (self.0)(source)
    }
}
