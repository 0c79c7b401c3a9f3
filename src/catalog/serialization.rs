//! Catalog document parsing
//!
//! Catalog documents are JSON with case-insensitive property names:
//! `AppId`, `appId`, `appid` and `app_id` all address the same field. Keys are
//! folded once here, at the document edge, before typed deserialization.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::metadata::AppMetadata;
use crate::error::{Better11Error, Result};

/// Top-level catalog document (keys already normalized)
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    applications: Vec<AppMetadata>,
}

/// Fold a property name to its canonical form: lowercase, no `_` or `-`
pub(crate) fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (normalize_key(&key), normalize_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

fn parse_error(path: &Path, reason: impl ToString) -> Better11Error {
    Better11Error::CatalogParseError {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Parse catalog JSON into its application entries, in document order
///
/// `path` is only used for error messages.
pub fn parse_catalog(content: &str, path: &Path) -> Result<Vec<AppMetadata>> {
    let content = content.trim_start_matches('\u{feff}');
    let value: Value = serde_json::from_str(content).map_err(|e| parse_error(path, e))?;
    let document: CatalogDocument =
        serde_json::from_value(normalize_keys(value)).map_err(|e| parse_error(path, e))?;
    Ok(document.applications)
}
