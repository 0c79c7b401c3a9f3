//! Download cache statistics and management
//!
//! Each app gets its own directory in the download cache, holding the
//! artifact named after the last segment of its URI:
//!
//! ```text
//! <cache_dir>/<app_id>/<file name>
//! ```
//!
//! Artifacts are listed as `<app_id>/<file name>`. Loose files at the top
//! level are listed by bare name.

use std::fs;
use std::path::{Component, Path};

use crate::error::{Better11Error, Result};

/// One cached artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedArtifact {
    /// Path relative to the cache directory, `/`-separated
    pub file_name: String,
    pub size: u64,
}

impl CachedArtifact {
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Cache statistics
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub artifacts: usize,
    pub total_size: u64,
}

impl CacheStats {
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// Human-readable byte count
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

fn cache_error(action: &str, e: &std::io::Error) -> Better11Error {
    Better11Error::IoError {
        message: format!("Failed to {action}: {e}"),
    }
}

fn read_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .map_err(|e| cache_error("read cache directory", &e))?
        .map(|entry| entry.map_err(|e| cache_error("read cache entry", &e)))
        .collect()
}

fn push_file(artifacts: &mut Vec<CachedArtifact>, entry: &fs::DirEntry, prefix: &str) -> Result<()> {
    let metadata = entry
        .metadata()
        .map_err(|e| cache_error("get metadata", &e))?;
    if metadata.is_file() {
        artifacts.push(CachedArtifact {
            file_name: format!("{prefix}{}", entry.file_name().to_string_lossy()),
            size: metadata.len(),
        });
    }
    Ok(())
}

/// Cached artifacts sorted by name; a missing cache is empty
pub fn list_cached_artifacts(cache_dir: &Path) -> Result<Vec<CachedArtifact>> {
    if !cache_dir.exists() {
        return Ok(Vec::new());
    }

    let mut artifacts = Vec::new();
    for entry in read_entries(cache_dir)? {
        let file_type = entry
            .file_type()
            .map_err(|e| cache_error("get metadata", &e))?;
        if file_type.is_dir() {
            let prefix = format!("{}/", entry.file_name().to_string_lossy());
            for inner in read_entries(&entry.path())? {
                push_file(&mut artifacts, &inner, &prefix)?;
            }
        } else {
            push_file(&mut artifacts, &entry, "")?;
        }
    }

    artifacts.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(artifacts)
}

pub fn cache_stats(cache_dir: &Path) -> Result<CacheStats> {
    let artifacts = list_cached_artifacts(cache_dir)?;
    Ok(CacheStats {
        artifacts: artifacts.len(),
        total_size: artifacts.iter().map(|a| a.size).sum(),
    })
}

/// Drop a per-app directory once it holds nothing
fn remove_if_empty(dir: &Path) {
    if let Err(e) = fs::remove_dir(dir) {
        tracing::debug!(dir = %dir.display(), error = %e, "cache directory kept");
    }
}

/// Remove every cached artifact, returning how many were removed
pub fn clear_cache(cache_dir: &Path) -> Result<usize> {
    let artifacts = list_cached_artifacts(cache_dir)?;
    for artifact in &artifacts {
        fs::remove_file(cache_dir.join(&artifact.file_name))
            .map_err(|e| cache_error("clear cache", &e))?;
    }
    if cache_dir.exists() {
        for entry in read_entries(cache_dir)? {
            if entry.path().is_dir() {
                remove_if_empty(&entry.path());
            }
        }
    }
    tracing::debug!(removed = artifacts.len(), dir = %cache_dir.display(), "cache cleared");
    Ok(artifacts.len())
}

/// Remove a single cached artifact by its listed name (`<app_id>/<file>`)
pub fn remove_cached_artifact(cache_dir: &Path, file_name: &str) -> Result<()> {
    let relative = Path::new(file_name);
    let components: Vec<Component<'_>> = relative.components().collect();
    let well_formed = matches!(components.len(), 1 | 2)
        && components.iter().all(|c| matches!(c, Component::Normal(_)));

    let path = cache_dir.join(relative);
    if !well_formed || !path.is_file() {
        return Err(Better11Error::IoError {
            message: format!("Artifact not found in cache: {file_name}"),
        });
    }
    fs::remove_file(&path).map_err(|e| cache_error("remove cached artifact", &e))?;
    if components.len() == 2 {
        if let Some(parent) = path.parent() {
            remove_if_empty(parent);
        }
    }
    Ok(())
}
