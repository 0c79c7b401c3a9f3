//! Artifact source classification and destination naming

use std::path::{Path, PathBuf};

use crate::catalog::AppMetadata;
use crate::error::{Better11Error, Result};

/// Where an artifact comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Existing file on disk (absolute, or relative to the catalog)
    Local(PathBuf),
    /// HTTP(S) URL to stream from
    Remote(String),
}

fn is_http_url(uri: &str) -> bool {
    let lower = uri.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Decide how to obtain the artifact for `app`
///
/// Non-URL values must name an existing file; anything else is
/// `ArtifactNotFound`.
pub fn resolve_source(app: &AppMetadata, base_dir: &Path) -> Result<ArtifactSource> {
    let uri = app.uri.trim();
    if is_http_url(uri) {
        return Ok(ArtifactSource::Remote(uri.to_string()));
    }

    let raw = uri.strip_prefix("file://").unwrap_or(uri);
    let candidate = Path::new(raw);
    let path = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    };

    if path.is_file() {
        Ok(ArtifactSource::Local(path))
    } else {
        Err(Better11Error::ArtifactNotFound {
            app_id: app.app_id.clone(),
            uri: app.uri.clone(),
        })
    }
}

/// File name used inside the download cache: the URI's last path segment
///
/// Falls back to `<app_id>.<ext>` when the URI has no usable segment.
pub fn destination_file_name(app: &AppMetadata) -> String {
    let uri = app.uri.trim();
    let uri = uri.split(['?', '#']).next().unwrap_or(uri);

    // Drop scheme and authority so "https://host" does not yield "host"
    let path_part = match uri.find("://") {
        Some(idx) if is_http_url(uri) => {
            let rest = &uri[idx + 3..];
            rest.find('/').map_or("", |slash| &rest[slash..])
        }
        _ => uri,
    };

    match path_part.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() && segment != "." && segment != ".." => {
            segment.to_string()
        }
        _ => format!("{}.{}", app.app_id, app.installer_type.extension()),
    }
}

/// Per-app directory name inside the download cache
///
/// Characters that could escape the cache directory are replaced with `_`.
pub fn cache_dir_name(app_id: &str) -> String {
    let name: String = app_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    match name.as_str() {
        "" | "." | ".." => format!("_{name}"),
        _ => name,
    }
}
