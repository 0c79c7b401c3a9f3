use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show application details:\n    better11 show demo-app")]
pub struct ShowArgs {
    /// Catalog id of the application
    pub app_id: String,
}
