//! Artifact pipeline: get a catalog entry's installer into the download cache
//!
//! ```text
//! AppMetadata.uri
//!     ├── http(s)://…   → Downloader (streamed, temp file + persist)
//!     └── path / file:// → copy (temp file + persist)
//!                               ↓
//!           <cache_dir>/<app_id>/<last uri segment>
//! ```

mod download;
mod source;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;

pub use download::Downloader;
pub use source::{ArtifactSource, cache_dir_name, destination_file_name, resolve_source};

use crate::catalog::AppMetadata;
use crate::error::{Better11Error, Result};

/// Obtains a local installer file for a catalog entry
pub trait ArtifactFetcher {
    /// Place the artifact for `app` in the cache and return its path
    fn fetch(&self, app: &AppMetadata) -> Result<PathBuf>;
}

/// Default fetcher backed by the local filesystem and HTTP(S)
#[derive(Debug, Clone)]
pub struct ArtifactPipeline {
    base_dir: PathBuf,
    cache_dir: PathBuf,
    downloader: Downloader,
}

impl ArtifactPipeline {
    /// `base_dir` resolves relative URIs; `cache_dir` receives artifacts
    pub fn new(
        base_dir: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            base_dir: base_dir.into(),
            cache_dir: cache_dir.into(),
            downloader: Downloader::new(timeout)?,
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Where the artifact for `app` lands in the cache
    ///
    /// Apps never share a directory, so equal file names cannot collide.
    pub fn destination(&self, app: &AppMetadata) -> PathBuf {
        self.cache_dir
            .join(cache_dir_name(&app.app_id))
            .join(destination_file_name(app))
    }

    fn copy_local(&self, app: &AppMetadata, src: &Path, dest: &Path) -> Result<()> {
        let transfer = |reason: String| Better11Error::transfer(&app.app_id, &app.uri, reason);

        let mut input = File::open(src).map_err(|e| transfer(e.to_string()))?;
        let permissions = input
            .metadata()
            .map_err(|e| transfer(e.to_string()))?
            .permissions();

        let staging_dir = dest.parent().unwrap_or(&self.cache_dir);
        let mut staged =
            NamedTempFile::new_in(staging_dir).map_err(|e| transfer(e.to_string()))?;
        std::io::copy(&mut input, staged.as_file_mut()).map_err(|e| transfer(e.to_string()))?;
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| transfer(e.to_string()))?;
        staged
            .persist(dest)
            .map_err(|e| transfer(format!("failed to store artifact: {}", e.error)))?;
        Ok(())
    }
}

impl ArtifactFetcher for ArtifactPipeline {
    fn fetch(&self, app: &AppMetadata) -> Result<PathBuf> {
        let source = resolve_source(app, &self.base_dir)?;

        let dest = self.destination(app);
        let app_dir = dest.parent().unwrap_or(&self.cache_dir);
        std::fs::create_dir_all(app_dir).map_err(|e| {
            Better11Error::transfer(
                &app.app_id,
                &app.uri,
                format!("cannot create {}: {e}", app_dir.display()),
            )
        })?;

        match &source {
            ArtifactSource::Remote(url) => {
                self.downloader.download(app, url, &dest)?;
            }
            ArtifactSource::Local(path) => {
                tracing::debug!(app_id = %app.app_id, src = %path.display(), "copying local artifact");
                self.copy_local(app, path, &dest)?;
            }
        }

        tracing::info!(app_id = %app.app_id, path = %dest.display(), "artifact ready");
        Ok(dest)
    }
}
