//! Install command implementation

use std::process::ExitCode;

use console::Style;

use crate::cli::InstallArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::{CancelFlag, InstallOptions};
use crate::ui;

/// Run install command
pub fn run(settings: &Settings, args: InstallArgs, cancel: CancelFlag) -> Result<ExitCode> {
    let manager = super::open_manager(settings, cancel)?;

    if args.dry_run {
        let plan = manager.plan(&args.app_id)?;
        ui::display_plan(&plan);
        return Ok(ExitCode::SUCCESS);
    }

    let options = InstallOptions { force: args.force };
    let (status, result) = manager.install_with(&args.app_id, options)?;

    if !result.succeeded() {
        ui::display_failure(&result);
        return Ok(ExitCode::FAILURE);
    }

    if result.command.is_empty() {
        println!(
            "{} {} is already installed",
            Style::new().bold().apply_to(&status.app_id),
            status.version
        );
    } else {
        println!(
            "{} {} {}",
            Style::new().green().bold().apply_to("Installed"),
            Style::new().bold().apply_to(&status.app_id),
            status.version
        );
    }
    Ok(ExitCode::SUCCESS)
}
