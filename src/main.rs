//! better11 - catalog-driven application installer
//!
//! Command line entry point: parses arguments, sets up logging and Ctrl-C
//! handling, then dispatches to the command implementations.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use better11::cli::{Cli, Commands};
use better11::commands;
use better11::error::Result;
use better11::operations::CancelFlag;

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn initialize_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn install_cancel_handler() -> CancelFlag {
    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("Cancelling after the current step...");
        handler_flag.cancel();
    }) {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
    }
    cancel
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Commands::Completions(args) = &cli.command {
        return commands::completions::run(args);
    }

    let settings = cli.settings()?;
    let cancel = install_cancel_handler();

    match cli.command {
        Commands::List(args) => commands::list::run(&settings, args),
        Commands::Show(args) => commands::show::run(&settings, args),
        Commands::Install(args) => commands::install::run(&settings, args, cancel),
        Commands::Uninstall(args) => commands::uninstall::run(&settings, args, cancel),
        Commands::Status(args) => commands::status::run(&settings, args),
        Commands::Cache(args) => commands::cache::run(&settings, args),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
