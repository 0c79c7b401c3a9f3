//! Cache command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::cache;
use crate::cli::{CacheArgs, CacheSubcommand};
use crate::config::Settings;
use crate::error::Result;

pub fn run(settings: &Settings, args: CacheArgs) -> Result<ExitCode> {
    let dir = settings.cache_dir.as_path();
    match args.command {
        Some(CacheSubcommand::List) => list_cached_artifacts(dir)?,
        Some(CacheSubcommand::Clear(clear_args)) => match clear_args.only {
            Some(name) => {
                cache::remove_cached_artifact(dir, &name)?;
                println!("Removed cached artifact: {name}");
            }
            None => {
                let removed = cache::clear_cache(dir)?;
                println!("Cache cleared ({removed} artifact(s) removed).");
            }
        },
        // Default: show only cache statistics
        None => show_cache_stats(dir)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn show_cache_stats(dir: &Path) -> Result<()> {
    let stats = cache::cache_stats(dir)?;

    println!("Cache Statistics:");
    println!("  Location: {}", dir.display());
    println!("  Artifacts: {}", stats.artifacts);
    println!("  Size: {}", stats.formatted_size());

    if stats.artifacts == 0 {
        println!("\nCache is empty.");
    } else {
        println!("\nRun 'better11 cache list' to list cached artifacts.");
        println!("Run 'better11 cache clear' to remove everything from cache.");
    }
    Ok(())
}

fn list_cached_artifacts(dir: &Path) -> Result<()> {
    show_cache_stats(dir)?;
    println!();

    let artifacts = cache::list_cached_artifacts(dir)?;
    if artifacts.is_empty() {
        println!("No cached artifacts.");
        return Ok(());
    }

    println!("Cached artifacts ({}):", artifacts.len());
    for artifact in &artifacts {
        println!("  {} ({})", artifact.file_name, artifact.formatted_size());
    }
    Ok(())
}
