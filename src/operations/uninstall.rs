//! Uninstall operation

use std::collections::HashSet;

use crate::error::{Better11Error, Result};
use crate::installer::InstallerResult;
use crate::resolver::dependents_of;

use super::AppManager;

/// Options for uninstallation
#[derive(Debug, Clone, Copy, Default)]
pub struct UninstallOptions {
    /// Remove even when installed apps depend on this one
    pub force: bool,
}

impl AppManager {
    /// Remove `app_id` unless an installed app depends on it
    ///
    /// Install state is checked before the catalog, so an id that was never
    /// installed reports [`Better11Error::AppNotInstalled`] whether or not the
    /// catalog knows it. A failed uninstaller is reported through the result and leaves the
    /// recorded status untouched.
    pub fn uninstall(&self, app_id: &str) -> Result<InstallerResult> {
        self.uninstall_with(app_id, UninstallOptions::default())
    }

    pub fn uninstall_with(
        &self,
        app_id: &str,
        options: UninstallOptions,
    ) -> Result<InstallerResult> {
        let status = self
            .store
            .get(app_id)?
            .filter(|status| status.installed)
            .ok_or_else(|| Better11Error::AppNotInstalled {
                app_id: app_id.to_string(),
            })?;
        let app = self.catalog.require(app_id)?;

        let dependents = self.installed_dependents(app_id)?;
        if !dependents.is_empty() {
            if !options.force {
                return Err(Better11Error::BlockedByDependents {
                    app_id: app_id.to_string(),
                    dependents,
                });
            }
            tracing::warn!(app_id, dependents = ?dependents, "forcing uninstall despite installed dependents");
        }

        self.cancel.check()?;
        let result = self
            .runner
            .uninstall(app, status.installer_path.as_deref())?;

        if result.succeeded() {
            self.store.mark_uninstalled(app_id)?;
            tracing::info!(app_id, "uninstalled");
        }
        Ok(result)
    }

    /// Catalog apps that depend on `app_id` and are currently installed
    fn installed_dependents(&self, app_id: &str) -> Result<Vec<String>> {
        let installed: HashSet<String> = self
            .store
            .all()?
            .into_iter()
            .filter(|status| status.installed)
            .map(|status| status.app_id)
            .collect();

        Ok(dependents_of(&self.catalog, app_id)
            .into_iter()
            .filter(|app| installed.contains(&app.app_id))
            .map(|app| app.app_id.clone())
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::{AppMetadata, InstallerType};
    use crate::state::AppStatus;
    use crate::test_fixtures::{HELLO_DIGEST, Harness, app};

    #[test]
    fn test_uninstall_flips_status() {
        let harness = Harness::new(vec![app("a", &[])]);
        let manager = harness.manager();
        manager.install("a").unwrap();

        let result = manager.uninstall("a").unwrap();
        assert!(result.succeeded());
        assert!(result.command.starts_with("msiexec /x"));

        let status = harness.store().get("a").unwrap().expect("record kept");
        assert!(!status.installed);
    }

    #[test]
    fn test_not_installed() {
        let harness = Harness::new(vec![app("a", &[])]);
        let err = harness.manager().uninstall("a").unwrap_err();
        assert!(matches!(err, Better11Error::AppNotInstalled { .. }));

        harness
            .store()
            .upsert(AppStatus::new("a", "1.0", false))
            .unwrap();
        let err = harness.manager().uninstall("a").unwrap_err();
        assert!(matches!(err, Better11Error::AppNotInstalled { .. }));
    }

    #[test]
    fn test_unknown_app_reports_not_installed() {
        let harness = Harness::new(vec![app("a", &[])]);
        let err = harness.manager().uninstall("ghost").unwrap_err();
        assert!(matches!(err, Better11Error::AppNotInstalled { .. }));
    }

    #[test]
    fn test_installed_app_dropped_from_catalog() {
        let harness = Harness::new(vec![app("a", &[])]);
        harness
            .store()
            .upsert(AppStatus::new("retired", "1.0", true))
            .unwrap();

        let err = harness.manager().uninstall("retired").unwrap_err();
        assert!(matches!(err, Better11Error::AppNotFound { .. }));
        assert!(harness.store().is_installed("retired").unwrap());
    }

    #[test]
    fn test_msi_uninstall_after_cache_cleared() {
        let harness = Harness::new(vec![app("a", &[])]);
        let manager = harness.manager();
        manager.install("a").unwrap();
        assert!(crate::cache::clear_cache(&harness.cache_dir()).unwrap() >= 1);

        let result = manager.uninstall("a").unwrap();
        assert!(result.succeeded());
        assert!(result.command.starts_with("msiexec /x"));
        assert!(!harness.store().is_installed("a").unwrap());
    }

    #[test]
    fn test_blocked_by_installed_dependents() {
        let harness = Harness::new(vec![app("d", &["e"]), app("e", &[]), app("f", &["e"])]);
        let manager = harness.manager();
        manager.install("d").unwrap();

        let err = manager.uninstall("e").unwrap_err();
        match err {
            Better11Error::BlockedByDependents { app_id, dependents } => {
                assert_eq!(app_id, "e");
                // f depends on e but is not installed
                assert_eq!(dependents, vec!["d"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(harness.store().is_installed("e").unwrap());
        assert_eq!(harness.commands().len(), 2);
    }

    #[test]
    fn test_uninstalled_dependents_do_not_block() {
        let harness = Harness::new(vec![app("d", &["e"]), app("e", &[])]);
        let manager = harness.manager();
        manager.install("d").unwrap();
        manager.uninstall("d").unwrap();

        assert!(manager.uninstall("e").unwrap().succeeded());
    }

    #[test]
    fn test_force_overrides_dependents_block() {
        let harness = Harness::new(vec![app("d", &["e"]), app("e", &[])]);
        let manager = harness.manager();
        manager.install("d").unwrap();

        let result = manager
            .uninstall_with("e", UninstallOptions { force: true })
            .unwrap();
        assert!(result.succeeded());
        assert!(!harness.store().is_installed("e").unwrap());
        assert!(harness.store().is_installed("d").unwrap());
    }

    #[test]
    fn test_failed_uninstaller_keeps_status() {
        let harness = Harness::new(vec![app("a", &[])]).failing("/x", 1605);
        let manager = harness.manager();
        manager.install("a").unwrap();

        let result = manager.uninstall("a").unwrap();
        assert_eq!(result.exit_code, 1605);
        assert!(harness.store().is_installed("a").unwrap());
    }

    #[test]
    fn test_exe_without_uninstall_command_is_unsupported() {
        let exe = AppMetadata::new("tool", "1.0", InstallerType::Exe, "tool.exe", HELLO_DIGEST);
        let harness = Harness::new(vec![exe]);
        let manager = harness.manager();
        manager.install("tool").unwrap();

        let err = manager.uninstall("tool").unwrap_err();
        assert!(matches!(err, Better11Error::UnsupportedOperation { .. }));
        assert!(harness.store().is_installed("tool").unwrap());
    }

    #[test]
    fn test_uninstall_command_override() {
        let exe = AppMetadata::new("tool", "1.0", InstallerType::Exe, "tool.exe", HELLO_DIGEST)
            .with_uninstall_command("tool-uninstall --silent");
        let harness = Harness::new(vec![exe]);
        let manager = harness.manager();
        manager.install("tool").unwrap();

        let result = manager.uninstall("tool").unwrap();
        assert_eq!(result.command, "tool-uninstall --silent");
    }
}
