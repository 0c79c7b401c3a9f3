//! HTTP(S) artifact downloads
//!
//! Bodies stream into a temp file next to the destination and are only
//! persisted once every byte has arrived.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::catalog::AppMetadata;
use crate::error::{Better11Error, Result};

const USER_AGENT: &str = concat!("better11/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for installer downloads
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Better11Error::ConfigInvalid {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Stream `url` into `dest`
    ///
    /// 404/410 responses and unreachable hosts are `ArtifactNotFound`; every
    /// other failure is a `TransferError`. `dest` is untouched on failure.
    pub fn download(&self, app: &AppMetadata, url: &str, dest: &Path) -> Result<u64> {
        let transfer = |reason: String| Better11Error::transfer(&app.app_id, url, reason);
        let not_found = || Better11Error::ArtifactNotFound {
            app_id: app.app_id.clone(),
            uri: url.to_string(),
        };

        tracing::debug!(app_id = %app.app_id, url, "starting download");

        let mut response = self.client.get(url).send().map_err(|e| {
            if e.is_connect() {
                not_found()
            } else {
                transfer(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(not_found());
        }
        if !status.is_success() {
            return Err(transfer(format!("server responded with HTTP {status}")));
        }

        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| transfer(e.to_string()))?;

        let expected = response.content_length();
        let written = std::io::copy(&mut response, staged.as_file_mut())
            .map_err(|e| transfer(format!("connection interrupted: {e}")))?;

        if let Some(expected) = expected.filter(|&len| len != written) {
            return Err(transfer(format!("received {written} of {expected} bytes")));
        }

        staged
            .as_file_mut()
            .flush()
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| transfer(e.to_string()))?;
        staged
            .persist(dest)
            .map_err(|e| transfer(format!("failed to store download: {}", e.error)))?;

        tracing::debug!(app_id = %app.app_id, bytes = written, dest = %dest.display(), "download complete");
        Ok(written)
    }
}
