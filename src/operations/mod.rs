//! High-level operations over the catalog and the machine's install state
//!
//! [`AppManager`] composes the other components:
//!
//! ```text
//! install(id)
//!   └─ build_plan ─┬─ dependency … ─┐
//!                  └─ root ─────────┴─ fetch → verify → run installer → record status
//! uninstall(id)
//!   └─ installed? → installed dependents? → run uninstaller → record status
//! status(id?)
//! ```

mod cancel;
mod install;
mod status;
mod uninstall;

use std::path::PathBuf;
use std::sync::Arc;

pub use cancel::CancelFlag;
pub use install::InstallOptions;
pub use uninstall::UninstallOptions;

use crate::artifact::ArtifactFetcher;
use crate::catalog::{AppCatalog, AppMetadata};
use crate::error::{Better11Error, Result};
use crate::hash::Verifier;
use crate::installer::{CommandRunner, InstallRunner};
use crate::progress::ProgressDisplay;
use crate::resolver::{InstallPlan, build_plan};
use crate::state::{AppStatus, StateStore};

/// Install orchestrator bound to one catalog and one state document
pub struct AppManager {
    catalog: Arc<AppCatalog>,
    store: StateStore,
    fetcher: Box<dyn ArtifactFetcher>,
    runner: InstallRunner,
    verifier: Verifier,
    cancel: CancelFlag,
    progress: ProgressDisplay,
}

impl AppManager {
    /// Manager that runs installers as child processes
    pub fn new(
        catalog: Arc<AppCatalog>,
        store: StateStore,
        fetcher: Box<dyn ArtifactFetcher>,
    ) -> Self {
        Self {
            catalog,
            store,
            fetcher,
            runner: InstallRunner::default(),
            verifier: Verifier::new(),
            cancel: CancelFlag::new(),
            progress: ProgressDisplay::hidden(),
        }
    }

    /// Manager over recorded state alone
    ///
    /// Backs commands that only read the state document, so they work when
    /// the catalog is missing. Every catalog lookup fails with `AppNotFound`.
    pub fn state_only(store: StateStore) -> Self {
        Self::new(Arc::new(AppCatalog::empty()), store, Box::new(NoArtifacts))
    }

    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = InstallRunner::new(runner);
        self
    }

    pub fn with_fetcher(mut self, fetcher: Box<dyn ArtifactFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_progress(mut self, progress: ProgressDisplay) -> Self {
        self.progress = progress;
        self
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Install order for `app_id`, without installing anything
    pub fn plan(&self, app_id: &str) -> Result<InstallPlan> {
        build_plan(&self.catalog, app_id)
    }

    /// Recorded status when `app` is installed at its catalog version
    fn up_to_date_status(&self, app: &AppMetadata) -> Result<Option<AppStatus>> {
        Ok(self
            .store
            .get(&app.app_id)?
            .filter(|status| status.is_current(&app.version)))
    }
}

/// Fetcher for a manager without a catalog
struct NoArtifacts;

impl ArtifactFetcher for NoArtifacts {
    fn fetch(&self, app: &AppMetadata) -> Result<PathBuf> {
        Err(Better11Error::ArtifactNotFound {
            app_id: app.app_id.clone(),
            uri: app.uri.clone(),
        })
    }
}

impl std::fmt::Debug for AppManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppManager")
            .field("apps", &self.catalog.len())
            .field("state", &self.store.path())
            .finish_non_exhaustive()
    }
}
