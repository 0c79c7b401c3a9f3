//! Catalog loading with per-loader caching
//!
//! A loader reads each catalog document at most once. Later `load` calls for
//! the same path return the cached `Arc` without touching the file system.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use super::AppCatalog;
use super::serialization::parse_catalog;
use crate::error::{Better11Error, Result};

/// Reads and caches catalog documents
#[derive(Debug, Default)]
pub struct CatalogLoader {
    cache: Mutex<HashMap<PathBuf, Arc<AppCatalog>>>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog at `path`, reusing a previously parsed copy
    ///
    /// # Errors
    ///
    /// `CatalogNotFound` if the document does not exist, `CatalogParseError`
    /// if it is not a valid catalog.
    pub fn load(&self, path: &Path) -> Result<Arc<AppCatalog>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(catalog) = cache.get(path) {
            tracing::debug!(path = %path.display(), "catalog cache hit");
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(read_catalog(path)?);
        tracing::debug!(
            path = %path.display(),
            applications = catalog.len(),
            "catalog loaded"
        );
        cache.insert(path.to_path_buf(), Arc::clone(&catalog));
        Ok(catalog)
    }
}

fn read_catalog(path: &Path) -> Result<AppCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Better11Error::CatalogNotFound {
            path: path.display().to_string(),
        },
        _ => Better11Error::CatalogParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    let apps = parse_catalog(&content, path)?;
    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    AppCatalog::build(apps, base_dir, path)
}
