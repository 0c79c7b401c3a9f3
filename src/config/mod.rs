//! Runtime configuration
//!
//! Every path the tool touches is resolved once into [`Settings`]. Values come
//! from command-line flags or their `BETTER11_*` environment variables; the
//! rest fall back to per-user defaults from [`crate::cache::paths`].

use std::path::PathBuf;
use std::time::Duration;

use crate::cache;
use crate::error::{Better11Error, Result};

/// Default HTTP timeout for artifact downloads, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 300;

/// Default catalog document, relative to the working directory
pub const DEFAULT_CATALOG: &str = "catalog.json";

/// Resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub state_path: PathBuf,
    pub cache_dir: PathBuf,
    pub http_timeout: Duration,
}

impl Settings {
    /// Fill unset locations with defaults and validate the timeout
    pub fn resolve(
        catalog_path: PathBuf,
        state_path: Option<PathBuf>,
        cache_dir: Option<PathBuf>,
        http_timeout_secs: u64,
    ) -> Result<Self> {
        if http_timeout_secs == 0 {
            return Err(Better11Error::ConfigInvalid {
                message: "HTTP timeout must be at least one second".to_string(),
            });
        }

        let state_path = match state_path {
            Some(path) => path,
            None => cache::default_state_file()?,
        };
        let cache_dir = match cache_dir {
            Some(path) => path,
            None => cache::default_cache_dir()?,
        };

        let settings = Self {
            catalog_path,
            state_path,
            cache_dir,
            http_timeout: Duration::from_secs(http_timeout_secs),
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}
