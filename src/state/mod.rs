//! Durable install state
//!
//! The state document is a JSON array of [`AppStatus`] records sorted by app
//! id. Every mutation is a full read-modify-write under [`StateLock`]:
//!
//! ```text
//! lock <state>.lock → read document → mutate map → temp file → rename → unlock
//! ```
//!
//! Concurrent processes are serialized per write only; a long install in one
//! process does not block another process from starting its own.

mod lock;
mod status;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

pub use lock::{StateLock, lock_path};
pub use status::AppStatus;

use crate::error::{Better11Error, Result};

type StatusMap = BTreeMap<String, AppStatus>;

/// Single writer of the state document
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Status for one app, if any was ever recorded
    pub fn get(&self, app_id: &str) -> Result<Option<AppStatus>> {
        Ok(self.read()?.remove(app_id))
    }

    /// Every recorded status, sorted by app id
    pub fn all(&self) -> Result<Vec<AppStatus>> {
        Ok(self.read()?.into_values().collect())
    }

    pub fn is_installed(&self, app_id: &str) -> Result<bool> {
        Ok(self.get(app_id)?.is_some_and(|s| s.installed))
    }

    /// Insert or replace the record for `status.app_id`
    pub fn upsert(&self, status: AppStatus) -> Result<()> {
        tracing::debug!(app_id = %status.app_id, installed = status.installed, "recording status");
        self.modify(|map| {
            map.insert(status.app_id.clone(), status);
        })
    }

    /// Flip an existing record to `installed = false`
    ///
    /// Returns the updated record, or `None` if the app was never recorded.
    pub fn mark_uninstalled(&self, app_id: &str) -> Result<Option<AppStatus>> {
        self.modify(|map| {
            map.get_mut(app_id).map(|status| {
                status.installed = false;
                status.clone()
            })
        })
    }

    fn modify<T>(&self, mutate: impl FnOnce(&mut StatusMap) -> T) -> Result<T> {
        let dir = self.parent_dir();
        std::fs::create_dir_all(&dir).map_err(|e| self.write_error(&e))?;

        let _lock = StateLock::acquire(&self.path)?;
        let mut map = self.read()?;
        let value = mutate(&mut map);
        self.write(&map, &dir)?;
        Ok(value)
    }

    fn read(&self) -> Result<StatusMap> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(StatusMap::new()),
            Err(e) => return Err(self.read_error(&e)),
        };

        if content.trim().is_empty() {
            return Ok(StatusMap::new());
        }

        let records: Vec<AppStatus> =
            serde_json::from_str(content.trim_start_matches('\u{feff}'))
                .map_err(|e| self.read_error(&e))?;

        Ok(records
            .into_iter()
            .map(|status| (status.app_id.clone(), status))
            .collect())
    }

    fn write(&self, map: &StatusMap, dir: &Path) -> Result<()> {
        let records: Vec<&AppStatus> = map.values().collect();
        let mut json =
            serde_json::to_string_pretty(&records).map_err(|e| self.write_error(&e))?;
        json.push('\n');

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.write_error(&e))?;
        staged
            .write_all(json.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| self.write_error(&e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.write_error(&e.error))?;
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn read_error(&self, e: &dyn std::fmt::Display) -> Better11Error {
        Better11Error::StateReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }

    fn write_error(&self, e: &dyn std::fmt::Display) -> Better11Error {
        Better11Error::StateWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}
