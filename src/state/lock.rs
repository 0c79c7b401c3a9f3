//! Advisory lock guarding the state document

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs4::FileExt;

use crate::error::{Better11Error, Result};

/// Exclusive lock on `<state>.lock`, released when dropped
#[derive(Debug)]
pub struct StateLock {
    _file: File,
    path: PathBuf,
}

impl StateLock {
    /// Block until the lock next to `state_path` is held
    pub fn acquire(state_path: &Path) -> Result<Self> {
        let path = lock_path(state_path);
        let lock_error = |e: std::io::Error| Better11Error::StateWriteFailed {
            path: path.display().to_string(),
            reason: format!("cannot lock: {e}"),
        };

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(lock_error)?;
        file.lock_exclusive().map_err(lock_error)?;

        tracing::trace!(lock = %path.display(), "state lock acquired");
        Ok(Self { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `installed.json` -> `installed.json.lock`
pub fn lock_path(state_path: &Path) -> PathBuf {
    let mut name = OsString::from(state_path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lock_path() {
        assert_eq!(
            lock_path(Path::new("/data/installed.json")),
            PathBuf::from("/data/installed.json.lock")
        );
    }

    #[test]
    fn test_acquire_creates_lock_file() {
        let temp = TempDir::new().unwrap();
        let state = temp.path().join("installed.json");

        let lock = StateLock::acquire(&state).unwrap();
        assert!(lock.path().exists());
        assert!(!state.exists());
    }

    #[test]
    fn test_lock_is_reacquirable_after_drop() {
        let temp = TempDir::new().unwrap();
        let state = temp.path().join("installed.json");

        drop(StateLock::acquire(&state).unwrap());
        assert!(StateLock::acquire(&state).is_ok());
    }
}
