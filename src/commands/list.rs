//! List command implementation
//!
//! Lists catalog applications in declared order with their install marker.

use std::collections::HashMap;
use std::process::ExitCode;

use crate::cli::ListArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::state::{AppStatus, StateStore};
use crate::ui;

/// Run list command
pub fn run(settings: &Settings, args: ListArgs) -> Result<ExitCode> {
    let catalog = super::load_catalog(settings)?;
    let statuses: HashMap<String, AppStatus> = StateStore::new(&settings.state_path)
        .all()?
        .into_iter()
        .map(|status| (status.app_id.clone(), status))
        .collect();

    let apps: Vec<_> = catalog
        .apps()
        .iter()
        .filter(|app| {
            !args.installed || statuses.get(&app.app_id).is_some_and(|s| s.installed)
        })
        .collect();

    if apps.is_empty() {
        if args.installed {
            println!("No applications installed.");
        } else {
            println!("Catalog is empty.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    println!("Applications ({}):", apps.len());
    for app in apps {
        ui::display_app_line(app, statuses.get(&app.app_id));
    }
    Ok(ExitCode::SUCCESS)
}
