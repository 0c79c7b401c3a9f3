//! Shared helpers for better11 integration tests

#![allow(dead_code)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{Value, json};

/// A temporary directory holding a catalog, its artifacts, a state file and
/// a download cache
pub struct TestWorkspace {
    pub temp: tempfile::TempDir,
    pub path: PathBuf,
    apps: Vec<Value>,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self {
            temp,
            path,
            apps: Vec::new(),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.path.join("catalog.json")
    }

    pub fn state_path(&self) -> PathBuf {
        self.path.join("state").join("installed.json")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.path.join("cache")
    }

    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.path.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Shell script artifact that exits with `exit_code`, marked executable
    pub fn write_script(&self, path: &str, exit_code: i32) -> PathBuf {
        self.write_executable(path, &format!("#!/bin/sh\nexit {exit_code}\n"))
    }

    pub fn write_executable(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.write_file(path, content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&full_path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make script executable");
        }
        full_path
    }

    /// Digest of a workspace file, as the catalog expects it
    pub fn digest(&self, path: &str) -> String {
        better11::hash::sha256_file(&self.path.join(path)).expect("Failed to hash file")
    }

    /// Append a catalog entry; `fields` overrides or extends the defaults
    pub fn add_app(&mut self, app_id: &str, uri: &str, dependencies: &[&str], fields: Value) {
        let sha256 = if self.file_exists(uri) {
            self.digest(uri)
        } else {
            "0".repeat(64)
        };
        let mut entry = json!({
            "AppId": app_id,
            "Name": app_id,
            "Version": "1.0.0",
            "InstallerType": "EXE",
            "Uri": uri,
            "Sha256": sha256,
            "Dependencies": dependencies,
        });
        if let (Some(entry), Value::Object(extra)) = (entry.as_object_mut(), fields) {
            entry.extend(extra);
        }
        self.apps.push(entry);
        self.save_catalog();
    }

    fn save_catalog(&self) {
        let document = json!({ "Applications": self.apps });
        std::fs::write(
            self.catalog_path(),
            serde_json::to_string_pretty(&document).unwrap(),
        )
        .expect("Failed to write catalog");
    }

    /// Recorded state as parsed JSON
    pub fn state(&self) -> Vec<Value> {
        let content = std::fs::read_to_string(self.state_path()).expect("Failed to read state");
        serde_json::from_str(&content).expect("State is not valid JSON")
    }

    pub fn state_of(&self, app_id: &str) -> Option<Value> {
        self.state()
            .into_iter()
            .find(|status| status["app_id"] == app_id)
    }

    /// better11 binary pointed at this workspace through the environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("better11").expect("binary should be built");
        cmd.current_dir(&self.path)
            .env("BETTER11_CATALOG", self.catalog_path())
            .env("BETTER11_STATE_FILE", self.state_path())
            .env("BETTER11_CACHE_DIR", self.cache_dir())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
