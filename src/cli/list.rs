use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List catalog applications:\n    better11 list\n\n\
                  List only installed applications:\n    better11 list --installed")]
pub struct ListArgs {
    /// Only show applications that are currently installed
    #[arg(long)]
    pub installed: bool,
}
