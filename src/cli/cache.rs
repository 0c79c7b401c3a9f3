use clap::{Parser, Subcommand};

/// Arguments for cache command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show cache statistics:\n    better11 cache\n\n\
                  List cached artifacts:\n    better11 cache list\n\n\
                  Clear all cached artifacts:\n    better11 cache clear\n\n\
                  Remove one artifact:\n    better11 cache clear --only demo-app/setup.msi")]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: Option<CacheSubcommand>,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List cached artifacts
    List,

    /// Clear cached artifacts
    Clear(ClearCacheArgs),
}

/// Arguments for cache clear command
#[derive(Parser, Debug)]
pub struct ClearCacheArgs {
    /// Remove only this artifact, named as `cache list` prints it (e.g. demo-app/setup.msi)
    #[arg(long)]
    pub only: Option<String>,
}
