use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install an application and its dependencies:\n    better11 install demo-app\n\n\
                   Reinstall even if already up to date:\n    better11 install demo-app --force\n\n\
                   Show the install order without installing:\n    better11 install demo-app --dry-run")]
pub struct InstallArgs {
    /// Catalog id of the application
    pub app_id: String,

    /// Reinstall the application even when the recorded version matches
    #[arg(long)]
    pub force: bool,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,
}
