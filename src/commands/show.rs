//! Show command implementation

use std::process::ExitCode;

use console::Style;

use crate::cli::ShowArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::resolver::build_plan;
use crate::state::StateStore;
use crate::ui;

/// Run show command
///
/// A plan that cannot be built (cycle, missing dependency) is reported
/// inline rather than failing the command.
pub fn run(settings: &Settings, args: ShowArgs) -> Result<ExitCode> {
    let catalog = super::load_catalog(settings)?;
    let app = catalog.require(&args.app_id)?;

    ui::display_app_details(app);
    println!();

    match build_plan(&catalog, &app.app_id) {
        Ok(plan) => ui::display_plan(&plan),
        Err(e) => println!(
            "{} {}",
            Style::new().bold().apply_to("Install order:"),
            Style::new().red().apply_to(e)
        ),
    }
    println!();

    match StateStore::new(&settings.state_path).get(&app.app_id)? {
        Some(status) => {
            println!("{}", Style::new().bold().apply_to("Status:"));
            ui::display_status(&status);
        }
        None => println!(
            "{} never installed",
            Style::new().bold().apply_to("Status:")
        ),
    }
    Ok(ExitCode::SUCCESS)
}
