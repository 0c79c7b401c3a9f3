//! Install/uninstall runner
//!
//! [`InstallerCommand`] decides *what* to run for each installer type,
//! a [`CommandRunner`] runs it, and the runner's output is mapped once into an
//! [`InstallerResult`]. Exit code 0 is success; anything else is failure.

mod command;
mod result;
mod runner;

use std::path::Path;

pub use command::InstallerCommand;
pub use result::InstallerResult;
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};

use crate::catalog::AppMetadata;
use crate::error::Result;

/// Builds installer commands and executes them through a [`CommandRunner`]
pub struct InstallRunner {
    runner: Box<dyn CommandRunner>,
}

impl InstallRunner {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run the installer for `app` from the verified artifact at `path`
    pub fn install(&self, app: &AppMetadata, path: &Path) -> Result<InstallerResult> {
        let command = InstallerCommand::install(app, path);
        self.execute(app, "install", &command)
    }

    /// Run the uninstaller for `app`
    ///
    /// `known_installer_path` is the artifact recorded at install time.
    pub fn uninstall(
        &self,
        app: &AppMetadata,
        known_installer_path: Option<&Path>,
    ) -> Result<InstallerResult> {
        let command = InstallerCommand::uninstall(app, known_installer_path)?;
        self.execute(app, "uninstall", &command)
    }

    fn execute(
        &self,
        app: &AppMetadata,
        action: &str,
        command: &InstallerCommand,
    ) -> Result<InstallerResult> {
        tracing::info!(app_id = %app.app_id, action, command = %command.line, "running installer");

        let output = self.runner.run(command)?;
        let result = InstallerResult::from_output(command, output);

        if result.succeeded() {
            tracing::info!(app_id = %app.app_id, action, "installer succeeded");
        } else {
            tracing::warn!(
                app_id = %app.app_id,
                action,
                exit_code = result.exit_code,
                "installer failed"
            );
        }
        Ok(result)
    }
}

impl Default for InstallRunner {
    fn default() -> Self {
        Self::new(Box::new(ProcessRunner))
    }
}

impl std::fmt::Debug for InstallRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallRunner").finish_non_exhaustive()
    }
}
