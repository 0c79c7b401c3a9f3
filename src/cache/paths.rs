//! Default locations for downloads and install state

use std::path::PathBuf;

use crate::error::{Better11Error, Result};

/// Directory name under the platform cache directory
const CACHE_DIR: &str = "better11";

/// Downloaded artifacts subdirectory within the cache
pub const DOWNLOADS_DIR: &str = "downloads";

/// Per-user state directory under the home directory
const STATE_DIR: &str = ".better11";

/// State document file name
pub const STATE_FILE: &str = "installed.json";

/// Default download cache: `<platform cache dir>/better11/downloads`
///
/// Uses the platform's standard cache location (XDG on Linux,
/// Library/Caches on macOS, `%LOCALAPPDATA%` on Windows).
pub fn default_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().ok_or_else(|| Better11Error::ConfigInvalid {
        message: "Could not determine cache directory; pass --cache-dir".to_string(),
    })?;
    Ok(base.join(CACHE_DIR).join(DOWNLOADS_DIR))
}

/// Default state document: `~/.better11/installed.json`
pub fn default_state_file() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| Better11Error::ConfigInvalid {
        message: "Could not determine home directory; pass --state-file".to_string(),
    })?;
    Ok(home.join(STATE_DIR).join(STATE_FILE))
}
