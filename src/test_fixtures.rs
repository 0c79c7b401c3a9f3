//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{Harness, app};
//!
//! let harness = Harness::new(vec![app("demo-app", &[])]);
//! harness.manager().install("demo-app")?;
//! assert_eq!(harness.commands(), vec!["msiexec /i ..."]);
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::artifact::ArtifactFetcher;
use crate::catalog::{AppCatalog, AppMetadata, InstallerType};
use crate::error::Result;
use crate::installer::{CommandOutput, CommandRunner, InstallerCommand};
use crate::operations::AppManager;
use crate::state::StateStore;

/// sha256("hello")
pub const HELLO_DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

/// MSI catalog entry whose artifact digest is `sha256("hello")`
pub fn app(id: &str, deps: &[&str]) -> AppMetadata {
    AppMetadata::new(id, "1.0", InstallerType::Msi, format!("{id}.msi"), HELLO_DIGEST)
        .with_dependencies(deps.iter().copied())
}

/// Catalog built from entries, panicking on invalid input
pub fn catalog(apps: Vec<AppMetadata>) -> AppCatalog {
    AppCatalog::new(apps, "/catalog").expect("valid catalog")
}

/// Fetcher that writes canned payloads into a directory
///
/// Apps without a configured payload get `"hello"`.
pub struct FakeFetcher {
    dir: PathBuf,
    payloads: HashMap<String, String>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl ArtifactFetcher for FakeFetcher {
    fn fetch(&self, app: &AppMetadata) -> Result<PathBuf> {
        self.fetched.lock().unwrap().push(app.app_id.clone());
        let payload = self
            .payloads
            .get(&app.app_id)
            .map_or("hello", String::as_str);
        std::fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{}.{}", app.app_id, app.installer_type.extension()));
        std::fs::write(&path, payload)?;
        Ok(path)
    }
}

/// Runner that records command lines and fails those matching a pattern
pub struct RecordingRunner {
    commands: Arc<Mutex<Vec<String>>>,
    failures: HashMap<String, i32>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &InstallerCommand) -> Result<CommandOutput> {
        self.commands.lock().unwrap().push(command.line.clone());
        let failure = self
            .failures
            .iter()
            .find(|(pattern, _)| command.line.contains(pattern.as_str()));
        Ok(match failure {
            Some((_, &code)) => CommandOutput::failed(code, "installer reported an error"),
            None => CommandOutput::succeeded(),
        })
    }
}

/// Temp state file, fake fetcher and recording runner around one catalog
pub struct Harness {
    pub temp: TempDir,
    pub catalog: Arc<AppCatalog>,
    payloads: HashMap<String, String>,
    failures: HashMap<String, i32>,
    fetched: Arc<Mutex<Vec<String>>>,
    commands: Arc<Mutex<Vec<String>>>,
}

impl Harness {
    pub fn new(apps: Vec<AppMetadata>) -> Self {
        Self::in_dir(apps, TempDir::new().expect("temp dir"))
    }

    /// Harness over an existing directory, keeping any recorded state
    pub fn in_dir(apps: Vec<AppMetadata>, temp: TempDir) -> Self {
        Self {
            temp,
            catalog: Arc::new(catalog(apps)),
            payloads: HashMap::new(),
            failures: HashMap::new(),
            fetched: Arc::default(),
            commands: Arc::default(),
        }
    }

    /// Serve `payload` as the artifact for `app_id`
    pub fn with_payload(mut self, app_id: &str, payload: &str) -> Self {
        self.payloads.insert(app_id.to_string(), payload.to_string());
        self
    }

    /// Commands whose line contains `pattern` exit with `code`
    pub fn failing(mut self, pattern: &str, code: i32) -> Self {
        self.failures.insert(pattern.to_string(), code);
        self
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.temp.path().join("cache")
    }

    pub fn store(&self) -> StateStore {
        StateStore::new(self.temp.path().join("installed.json"))
    }

    pub fn manager(&self) -> AppManager {
        AppManager::new(
            Arc::clone(&self.catalog),
            self.store(),
            Box::new(FakeFetcher {
                dir: self.cache_dir(),
                payloads: self.payloads.clone(),
                fetched: Arc::clone(&self.fetched),
            }),
        )
        .with_runner(Box::new(RecordingRunner {
            commands: Arc::clone(&self.commands),
            failures: self.failures.clone(),
        }))
    }

    /// App ids fetched so far, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// Command lines run so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}
