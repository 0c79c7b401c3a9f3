use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove an application:\n    better11 uninstall demo-app\n\n\
                  Remove even though installed applications depend on it:\n    better11 uninstall runtime --force")]
pub struct UninstallArgs {
    /// Catalog id of the application
    pub app_id: String,

    /// Remove even when installed applications depend on it
    #[arg(long)]
    pub force: bool,
}
