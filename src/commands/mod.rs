//! Command implementations for the better11 CLI
//!
//! Each command returns the process exit code; surfaced errors are printed
//! by `main`.

pub mod cache;
pub mod completions;
pub mod install;
pub mod list;
pub mod show;
pub mod status;
pub mod uninstall;

use std::sync::Arc;

use crate::artifact::ArtifactPipeline;
use crate::catalog::{AppCatalog, CatalogLoader};
use crate::config::Settings;
use crate::error::Result;
use crate::operations::{AppManager, CancelFlag};
use crate::progress::ProgressDisplay;
use crate::state::StateStore;

pub(crate) fn load_catalog(settings: &Settings) -> Result<Arc<AppCatalog>> {
    CatalogLoader::new().load(&settings.catalog_path)
}

/// Manager wired to the real filesystem, network and process runner
pub(crate) fn open_manager(settings: &Settings, cancel: CancelFlag) -> Result<AppManager> {
    let catalog = load_catalog(settings)?;
    let pipeline = ArtifactPipeline::new(
        catalog.base_dir(),
        &settings.cache_dir,
        settings.http_timeout,
    )?;

    let progress = if console::Term::stderr().is_term() {
        ProgressDisplay::new()
    } else {
        ProgressDisplay::hidden()
    };

    Ok(AppManager::new(
        catalog,
        StateStore::new(&settings.state_path),
        Box::new(pipeline),
    )
    .with_cancel_flag(cancel)
    .with_progress(progress))
}
