//! Uninstall command implementation

use std::process::ExitCode;

use console::Style;

use crate::cli::UninstallArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::{CancelFlag, UninstallOptions};
use crate::ui;

/// Run uninstall command
pub fn run(settings: &Settings, args: UninstallArgs, cancel: CancelFlag) -> Result<ExitCode> {
    let manager = super::open_manager(settings, cancel)?;

    let options = UninstallOptions { force: args.force };
    let result = manager.uninstall_with(&args.app_id, options)?;

    if !result.succeeded() {
        ui::display_failure(&result);
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Uninstalled"),
        Style::new().bold().apply_to(&args.app_id)
    );
    Ok(ExitCode::SUCCESS)
}
