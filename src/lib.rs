//! better11 - catalog-driven application installer
//!
//! Resolves a requested application's dependencies from a declarative JSON
//! catalog, fetches and verifies each installer artifact, runs the matching
//! MSI/EXE/APPX installer and records the outcome so repeated runs are
//! idempotent.
//!
//! ```text
//! CLI → AppManager → build_plan(catalog)
//!                      └─ per app: ArtifactFetcher → Verifier → InstallRunner → StateStore
//! ```

pub mod artifact;
pub mod cache;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hash;
pub mod installer;
pub mod operations;
pub mod progress;
pub mod resolver;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_fixtures;

pub use error::{Better11Error, Result};
