//! Terminal formatting for catalog entries, statuses and installer results

use console::Style;

use crate::catalog::AppMetadata;
use crate::installer::InstallerResult;
use crate::resolver::InstallPlan;
use crate::state::AppStatus;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("  {} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// `[installed]`, `[outdated]`, `[failed]` or nothing
pub fn status_marker(app: &AppMetadata, status: Option<&AppStatus>) -> String {
    match status {
        Some(s) if s.is_current(&app.version) => {
            Style::new().green().apply_to("[installed]").to_string()
        }
        Some(s) if s.installed => Style::new()
            .yellow()
            .apply_to(format!("[outdated: {}]", s.version))
            .to_string(),
        _ => String::new(),
    }
}

/// One line per catalog entry
pub fn display_app_line(app: &AppMetadata, status: Option<&AppStatus>) {
    println!(
        "  {} {} {} {}",
        Style::new().bold().yellow().apply_to(&app.app_id),
        app.version,
        Style::new().dim().apply_to(format!("({})", app.installer_type)),
        status_marker(app, status)
    );
    if app.name != app.app_id {
        println!("    {}", app.name);
    }
}

/// Full metadata block used by `show`
pub fn display_app_details(app: &AppMetadata) {
    println!("{}", Style::new().bold().yellow().apply_to(&app.app_id));
    println!("  {} {}", Style::new().bold().apply_to("Name:"), app.name);
    println!("  {} {}", Style::new().bold().apply_to("Version:"), app.version);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Installer:"),
        app.installer_type
    );
    println!("  {} {}", Style::new().bold().apply_to("Uri:"), app.uri);
    println!("  {} {}", Style::new().bold().apply_to("Sha256:"), app.sha256);
    display_opt_field!("Description:", app.description);
    display_opt_field!("Package:", app.package_name);
    display_opt_field!("Uninstall command:", app.uninstall_command);

    if !app.silent_args.is_empty() {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Silent args:"),
            app.silent_args.join(" ")
        );
    }
    if !app.dependencies.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Dependencies:"));
        for dependency in &app.dependencies {
            println!("    - {}", Style::new().cyan().apply_to(dependency));
        }
    }
}

/// Numbered install order
pub fn display_plan(plan: &InstallPlan) {
    println!("{}", Style::new().bold().apply_to("Install order:"));
    for (index, app_id) in plan.iter().enumerate() {
        println!("  {}. {}", index + 1, Style::new().cyan().apply_to(app_id));
    }
}

pub fn display_status(status: &AppStatus) {
    let state = if status.installed {
        Style::new().green().apply_to("installed")
    } else {
        Style::new().red().apply_to("not installed")
    };
    println!(
        "  {} {} {}",
        Style::new().bold().yellow().apply_to(&status.app_id),
        status.version,
        state
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Date:"),
        status.install_date.to_rfc3339()
    );
    if let Some(ref path) = status.installer_path {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Installer:"),
            path.display()
        );
    }
    if !status.dependencies_installed.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Dependencies:"),
            status.dependencies_installed.join(", ")
        );
    }
}

/// Command and captured output of a failed installer, on stderr
pub fn display_failure(result: &InstallerResult) {
    eprintln!(
        "{} {} (exit code {})",
        Style::new().red().bold().apply_to("Installer failed:"),
        result.command,
        result.exit_code
    );
    for stream in [&result.stdout, &result.stderr] {
        for line in stream.lines() {
            eprintln!("  {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::app;

    #[test]
    fn test_status_marker() {
        console::set_colors_enabled(false);
        let demo = app("demo-app", &[]);

        assert_eq!(status_marker(&demo, None), "");
        let current = AppStatus::new("demo-app", "1.0", true);
        assert_eq!(status_marker(&demo, Some(&current)), "[installed]");
        let outdated = AppStatus::new("demo-app", "0.9", true);
        assert_eq!(status_marker(&demo, Some(&outdated)), "[outdated: 0.9]");
        let removed = AppStatus::new("demo-app", "1.0", false);
        assert_eq!(status_marker(&demo, Some(&removed)), "");
    }
}
