//! Status command implementation

use std::process::ExitCode;

use crate::cli::StatusArgs;
use crate::config::Settings;
use crate::error::{Better11Error, Result};
use crate::operations::AppManager;
use crate::state::StateStore;
use crate::ui;

/// Run status command
///
/// Reads only the state document, so it works without a catalog. An id with
/// no record lists every recorded app.
pub fn run(settings: &Settings, args: StatusArgs) -> Result<ExitCode> {
    let manager = AppManager::state_only(StateStore::new(&settings.state_path));
    let statuses = manager.status(args.app_id.as_deref())?;

    if args.json {
        let json = serde_json::to_string_pretty(&statuses).map_err(|e| Better11Error::IoError {
            message: format!("Failed to serialize status: {e}"),
        })?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    if statuses.is_empty() {
        println!("No applications recorded.");
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(id) = args.app_id.as_deref() {
        if !statuses.iter().any(|status| status.app_id == id) {
            println!("No status recorded for {id}; showing all recorded applications.");
        }
    }

    for status in &statuses {
        ui::display_status(status);
    }
    Ok(ExitCode::SUCCESS)
}
