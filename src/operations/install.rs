//! Install operation
//!
//! Dependencies come from the cycle-checked plan, never from ad hoc
//! recursion. Each planned dependency is skipped when already installed at
//! its catalog version; the first failure aborts the rest of the plan.

use crate::catalog::AppMetadata;
use crate::error::{Better11Error, Result};
use crate::installer::InstallerResult;
use crate::resolver::InstallPlan;
use crate::state::AppStatus;

use super::AppManager;

/// Options for installation
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Reinstall the requested app even when it is up to date
    pub force: bool,
}

impl AppManager {
    /// Install `app_id` and everything it depends on
    ///
    /// Returns the recorded status of `app_id` and the result of its
    /// installer. A failed root installer is reported through the result and
    /// recorded with `installed = false`.
    pub fn install(&self, app_id: &str) -> Result<(AppStatus, InstallerResult)> {
        self.install_with(app_id, InstallOptions::default())
    }

    pub fn install_with(
        &self,
        app_id: &str,
        options: InstallOptions,
    ) -> Result<(AppStatus, InstallerResult)> {
        let app = self.catalog.require(app_id)?;

        if !options.force {
            if let Some(status) = self.up_to_date_status(app)? {
                tracing::info!(app_id, version = %status.version, "already installed");
                return Ok((status, InstallerResult::already_installed(app_id)));
            }
        }

        let plan = self.plan(app_id)?;
        tracing::info!(app_id, plan = %plan, "installing");

        self.progress.start(plan.len());
        let outcome = self.run_plan(&plan, app);
        match &outcome {
            Ok(_) => self.progress.finish(),
            Err(_) => self.progress.abandon(),
        }
        outcome
    }

    fn run_plan(
        &self,
        plan: &InstallPlan,
        root: &AppMetadata,
    ) -> Result<(AppStatus, InstallerResult)> {
        for dependency_id in plan.dependencies() {
            self.cancel.check()?;
            let dependency = self.catalog.require(dependency_id)?;
            self.progress.update_app(dependency_id, "checking");

            if self.up_to_date_status(dependency)?.is_some() {
                tracing::debug!(app_id = %dependency_id, "dependency already installed");
                self.progress.inc_app();
                continue;
            }

            let (_, result) = self.install_one(dependency)?;
            if !result.succeeded() {
                return Err(Better11Error::DependencyInstallFailed {
                    app_id: root.app_id.clone(),
                    dependency: dependency_id.clone(),
                    exit_code: result.exit_code,
                });
            }
            self.progress.inc_app();
        }

        self.cancel.check()?;
        let outcome = self.install_one(root)?;
        self.progress.inc_app();
        Ok(outcome)
    }

    /// Fetch, verify and install a single app, then record its status
    fn install_one(&self, app: &AppMetadata) -> Result<(AppStatus, InstallerResult)> {
        self.progress.update_app(&app.app_id, "fetching");
        let path = self.fetcher.fetch(app)?;

        self.progress.update_app(&app.app_id, "verifying");
        let check = self.verifier.check(app, &path)?;
        if !check.matched {
            tracing::warn!(
                app_id = %app.app_id,
                path = %path.display(),
                "artifact failed verification, removing it"
            );
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "could not remove rejected artifact");
            }
            return Err(Better11Error::VerificationFailed {
                app_id: app.app_id.clone(),
                expected: app.sha256.clone(),
                actual: check.actual,
            });
        }

        self.cancel.check()?;
        self.progress.update_app(&app.app_id, "installing");
        let result = self.runner.install(app, &path)?;

        let mut dependencies_installed = Vec::new();
        for dependency in &app.dependencies {
            if self.store.is_installed(dependency)? {
                dependencies_installed.push(dependency.clone());
            }
        }

        let status = AppStatus::new(&app.app_id, &app.version, result.succeeded())
            .with_installer_path(path)
            .with_dependencies_installed(dependencies_installed);
        self.store.upsert(status.clone())?;

        Ok((status, result))
    }
}
