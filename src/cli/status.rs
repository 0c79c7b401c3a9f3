use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show every recorded application:\n    better11 status\n\n\
                  Show one application:\n    better11 status demo-app\n\n\
                  Machine-readable output:\n    better11 status --json")]
pub struct StatusArgs {
    /// Only show this application
    pub app_id: Option<String>,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}
