//! CLI definitions using clap derive API
//!
//! One submodule per command's argument type:
//! - install, uninstall: change what is installed
//! - list, show, status: inspect the catalog and recorded state
//! - cache: download cache management
//! - completions: shell completions

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cache;
pub mod completions;
pub mod install;
pub mod list;
pub mod show;
pub mod status;
pub mod uninstall;

pub use cache::{CacheArgs, CacheSubcommand, ClearCacheArgs};
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use show::ShowArgs;
pub use status::StatusArgs;
pub use uninstall::UninstallArgs;

use crate::config::{DEFAULT_CATALOG, DEFAULT_HTTP_TIMEOUT_SECS, Settings};
use crate::error::Result;

/// better11 - application catalog installer
///
/// Install, remove and track applications declared in a JSON catalog.
#[derive(Parser, Debug)]
#[command(
    name = "better11",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install applications from a declarative catalog",
    long_about = "better11 resolves catalog dependencies, fetches and verifies installer \
                  artifacts (MSI, EXE, APPX), runs the right installer for each one and \
                  records what is installed so repeated runs do nothing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  better11 list                          \x1b[90m# Catalog apps and what is installed\x1b[0m\n   \
                  better11 install demo-app              \x1b[90m# Install with dependencies\x1b[0m\n   \
                  better11 install demo-app --dry-run    \x1b[90m# Print the install plan only\x1b[0m\n   \
                  better11 uninstall demo-app            \x1b[90m# Remove unless something needs it\x1b[0m\n   \
                  better11 status --json                 \x1b[90m# Recorded state as JSON\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Catalog document
    #[arg(long, global = true, env = "BETTER11_CATALOG", default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,

    /// State document (defaults to ~/.better11/installed.json)
    #[arg(long, global = true, env = "BETTER11_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Download cache directory (defaults to the platform cache directory)
    #[arg(long, global = true, env = "BETTER11_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// HTTP timeout for downloads, in seconds
    #[arg(
        long,
        global = true,
        env = "BETTER11_HTTP_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_HTTP_TIMEOUT_SECS
    )]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve global options into [`Settings`]
    pub fn settings(&self) -> Result<Settings> {
        Settings::resolve(
            self.catalog.clone(),
            self.state_file.clone(),
            self.cache_dir.clone(),
            self.timeout,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog applications
    List(ListArgs),

    /// Show one application's metadata, plan and status
    Show(ShowArgs),

    /// Install an application and its dependencies
    Install(InstallArgs),

    /// Remove an installed application
    Uninstall(UninstallArgs),

    /// Show recorded install state
    Status(StatusArgs),

    /// Manage the download cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
