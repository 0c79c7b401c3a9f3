//! Download cache and default path handling
//!
//! - [`paths`]: default cache and state locations
//! - [`stats`]: listing, statistics and cleanup of cached artifacts

pub mod paths;
pub mod stats;

pub use paths::{default_cache_dir, default_state_file};
pub use stats::{
    CacheStats, CachedArtifact, cache_stats, clear_cache, list_cached_artifacts,
    remove_cached_artifact,
};
